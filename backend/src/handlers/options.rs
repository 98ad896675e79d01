use axum::Json;
use shared::FormOptions;

/// Select options for the yield form
pub async fn get_form_options() -> Json<FormOptions> {
    Json(FormOptions::default())
}
