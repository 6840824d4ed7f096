use super::*;

/// Expect the OpenAPI document to list the registered routes
#[tokio::test]
async fn serves_openapi_document() -> Result<(), TestError> {
    let test = TestBuilder::new().build().await?;
    let app = app(&test);

    let resp = send(&app, Method::GET, "/api/docs/openapi.json", None, None).await;

    assert_eq!(resp.status(), StatusCode::OK);
    let doc = json_body(resp).await;
    assert!(doc["paths"].get("/api/teams").is_some());
    assert!(doc["paths"].get("/api/matches/{id}/live/deliveries").is_some());
    assert!(doc["paths"]["/api/teams/{id}"].get("delete").is_some());

    Ok(())
}
