//! Ingredient catalog endpoint
//!
//! `list.php?i=list` returns every ingredient TheMealDB knows (a few
//! hundred entries).

use crate::client::MealDbClient;
use crate::endpoints::meals::MealsResponse;
use crate::error::ApiResult;
use serde::{Deserialize, Serialize};

/// Ingredients API interface
#[derive(Clone)]
pub struct IngredientsApi {
    client: MealDbClient,
}

impl IngredientsApi {
    /// Create a new ingredients API interface
    pub(crate) fn new(client: MealDbClient) -> Self {
        Self { client }
    }

    /// Full ingredient catalog
    ///
    /// GET /list.php?i=list
    pub async fn list(&self) -> ApiResult<Vec<IngredientRecord>> {
        let response: MealsResponse<IngredientRecord> = self.client.get("list.php?i=list").await?;
        Ok(response.into_vec())
    }

    /// Catalog names, lower-cased, blanks dropped, in API order
    pub async fn names(&self) -> ApiResult<Vec<String>> {
        Ok(catalog_names(self.list().await?))
    }
}

/// One catalog entry
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IngredientRecord {
    /// Ingredient ID
    #[serde(default)]
    pub id_ingredient: Option<String>,
    /// Ingredient name
    pub str_ingredient: String,
    /// Long description
    #[serde(default)]
    pub str_description: Option<String>,
    /// Kind of ingredient (e.g. "Meat")
    #[serde(default)]
    pub str_type: Option<String>,
}

fn catalog_names(records: Vec<IngredientRecord>) -> Vec<String> {
    records
        .into_iter()
        .map(|record| record.str_ingredient.trim().to_lowercase())
        .filter(|name| !name.is_empty())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_names() {
        let json = r#"{"meals":[
            {"idIngredient":"1","strIngredient":"Chicken","strDescription":"Poultry","strType":null},
            {"idIngredient":"2","strIngredient":"Salmon","strDescription":null,"strType":"Fish"},
            {"idIngredient":"3","strIngredient":"  ","strDescription":null,"strType":null}
        ]}"#;
        let response: MealsResponse<IngredientRecord> = serde_json::from_str(json).unwrap();
        assert_eq!(catalog_names(response.into_vec()), vec!["chicken", "salmon"]);
    }
}
