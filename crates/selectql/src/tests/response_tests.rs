use crate::response::GraphQLLocation;
use crate::response::PathSegment;
use crate::ClientError;
use crate::GraphQLRequest;
use crate::GraphQLResponse;

type Result<T> = std::result::Result<T, ClientError>;

#[derive(Debug, PartialEq, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct Film {
    title: String,
    episode_id: u32,
}

fn response(raw: serde_json::Value) -> Result<GraphQLResponse> {
    GraphQLResponse::from_raw(GraphQLRequest::new("query film { film { title episodeID } }"), raw)
}

#[test]
fn successful_response() -> Result<()> {
    let response = response(serde_json::json!({
        "data": { "film": { "title": "A New Hope", "episodeID": 4 } },
        "extensions": { "cost": 2 },
    }))?;

    assert!(response.is_success());
    assert!(!response.has_errors());
    assert_eq!(response.error_message(), None);
    assert_eq!(response.extensions, Some(serde_json::json!({ "cost": 2 })));
    assert_eq!(
        response.field::<Film>("film")?,
        Film {
            title: "A New Hope".to_string(),
            episode_id: 4,
        },
    );
    assert_eq!(response.request.query, "query film { film { title episodeID } }");
    Ok(())
}

#[test]
fn errors_are_decoded() -> Result<()> {
    let response = response(serde_json::json!({
        "data": { "film": null },
        "errors": [
            {
                "message": "Film not found",
                "locations": [{ "line": 1, "column": 14 }],
                "path": ["film", 0, "title"],
            },
            { "message": "Rate limited", "extensions": { "code": "THROTTLED" } },
        ],
    }))?;

    assert!(response.has_errors());
    assert!(!response.is_success());
    assert_eq!(response.errors.len(), 2);
    assert_eq!(response.errors[0].locations, vec![GraphQLLocation { line: 1, column: 14 }]);
    assert_eq!(
        response.errors[0].path,
        Some(vec![
            PathSegment::Field("film".to_string()),
            PathSegment::Index(0),
            PathSegment::Field("title".to_string()),
        ]),
    );
    assert_eq!(response.errors[0].to_string(), "Film not found (at film[0].title)");
    assert_eq!(response.errors[1].to_string(), "Rate limited");
    assert_eq!(response.error_message().as_deref(), Some("Film not found; Rate limited"));
    assert_eq!(
        response.field::<serde_json::Value>("film"),
        Err(ClientError::GraphQLErrors {
            message: "Film not found; Rate limited".to_string(),
        }),
    );
    Ok(())
}

#[test]
fn null_data_is_missing() -> Result<()> {
    let response = response(serde_json::json!({ "data": null }))?;

    assert_eq!(response.data, None);
    assert!(!response.is_success());
    assert_eq!(
        response.data_as::<serde_json::Value>(),
        Err(ClientError::MissingData { field: None }),
    );
    Ok(())
}

#[test]
fn absent_field_is_missing() -> Result<()> {
    let response = response(serde_json::json!({ "data": { "film": null } }))?;

    assert_eq!(
        response.field::<Film>("person"),
        Err(ClientError::MissingData {
            field: Some("person".to_string()),
        }),
    );
    assert!(matches!(
        response.field::<Film>("film"),
        Err(ClientError::InvalidResponse { .. }),
    ));
    Ok(())
}

#[test]
fn malformed_response_is_rejected() {
    assert!(matches!(
        response(serde_json::json!({ "errors": "boom" })),
        Err(ClientError::InvalidResponse { .. }),
    ));
}
