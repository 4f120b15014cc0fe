//! Descriptor document templates
//!
//! The synthesized OpenAPI schema and plugin manifest, parameterized by the
//! externally visible base URL. Rendering is pure; writing to disk lives in
//! the store module.

use serde_json::json;

use crate::logger;

const OPENAPI_TEMPLATE: &str = r#"openapi: 3.1.0
info:
  title: Current Date & Time Tool
  version: "1.0.0"
  description: API for retrieving the current date and time, or just the date, in UTC.
servers:
  - url: {base_url}
paths:
  /datetime/current:
    get:
      summary: Get the current UTC date and time (ISO 8601)
      operationId: getCurrentDatetime
      description: "Retrieves the current date and time in UTC, formatted as ISO 8601 (e.g., 2023-10-27T10:00:00.123456+00:00)."
      responses:
        '200':
          description: Successful response with the current UTC date and time.
          content:
            application/json:
              schema:
                type: object
                properties:
                  current_datetime_utc:
                    type: string
                    format: date-time
                    description: Current UTC date and time in ISO 8601 format.
  /date/current:
    get:
      summary: Get the current UTC date (YYYY-MM-DD format)
      operationId: getCurrentDate
      description: "Retrieves the current UTC date in 'YYYY-MM-DD' format, for APIs that require a date-only string."
      responses:
        '200':
          description: Successful response with the current UTC date.
          content:
            application/json:
              schema:
                type: object
                properties:
                  current_date_utc:
                    type: string
                    format: date
                    pattern: '^\d{4}-\d{2}-\d{2}$'
                    description: Current UTC date in YYYY-MM-DD format (e.g., 2023-10-27).
"#;

/// OpenAPI 3.1 document advertising the two time operations.
pub fn openapi_yaml(base_url: &str) -> String {
    OPENAPI_TEMPLATE.replace("{base_url}", base_url)
}

/// AI plugin manifest pointing the agent framework at the OpenAPI document.
///
/// `api.url` and `logo_url` are derived from the same base URL so the
/// manifest always resolves back to this process's own routes.
pub fn plugin_manifest(base_url: &str, contact_email: &str, legal_info: &str) -> String {
    let manifest = json!({
        "schema_version": "v1",
        "name_for_model": "current_time_and_date_tool",
        "name_for_human": "Current Time & Date",
        "description_for_model": "Provides the current date and time in UTC. Use `getCurrentDatetime` for the full date and time (ISO 8601) or `getCurrentDate` for just the date in 'YYYY-MM-DD' format. Use this tool whenever the user asks for the current date, current time, 'now', or similar temporal queries, especially when a specific date format is needed for other APIs.",
        "description_for_human": "A tool to get the current date and time (UTC) in various formats.",
        "auth": {
            "type": "none"
        },
        "api": {
            "type": "openapi",
            "url": format!("{base_url}/openapi.yaml")
        },
        "logo_url": format!("{base_url}/logo.png"),
        "contact_email": contact_email,
        "legal_info": legal_info
    });

    serde_json::to_string_pretty(&manifest).unwrap_or_else(|e| {
        logger::log_error(&format!("Failed to serialize plugin manifest: {e}"));
        String::from("{}")
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE_URL: &str = "http://localhost:5000";

    #[test]
    fn test_openapi_yaml_parses_and_declares_both_operations() {
        let value: serde_json::Value =
            serde_yaml::from_str(&openapi_yaml(BASE_URL)).expect("template is valid yaml");

        assert_eq!(value["openapi"], "3.1.0");
        assert_eq!(value["servers"][0]["url"], BASE_URL);
        assert_eq!(
            value["paths"]["/datetime/current"]["get"]["operationId"],
            "getCurrentDatetime"
        );
        assert_eq!(
            value["paths"]["/date/current"]["get"]["operationId"],
            "getCurrentDate"
        );

        let date_field = &value["paths"]["/date/current"]["get"]["responses"]["200"]["content"]
            ["application/json"]["schema"]["properties"]["current_date_utc"];
        assert_eq!(date_field["pattern"], r"^\d{4}-\d{2}-\d{2}$");
    }

    #[test]
    fn test_manifest_fixed_fields() {
        let manifest: serde_json::Value = serde_json::from_str(&plugin_manifest(
            BASE_URL,
            "support@example.com",
            "https://www.example.com/legal",
        ))
        .expect("manifest is valid json");

        for field in [
            "schema_version",
            "name_for_model",
            "name_for_human",
            "description_for_model",
            "description_for_human",
            "auth",
            "api",
            "logo_url",
            "contact_email",
            "legal_info",
        ] {
            assert!(manifest.get(field).is_some(), "missing field: {field}");
        }
        assert_eq!(manifest["auth"]["type"], "none");
        assert_eq!(manifest["api"]["type"], "openapi");
    }

    #[test]
    fn test_manifest_urls_resolve_to_own_routes() {
        let manifest: serde_json::Value = serde_json::from_str(&plugin_manifest(
            BASE_URL,
            "support@example.com",
            "https://www.example.com/legal",
        ))
        .expect("manifest is valid json");

        assert_eq!(
            manifest["api"]["url"],
            format!("{BASE_URL}/openapi.yaml")
        );
        assert_eq!(manifest["logo_url"], format!("{BASE_URL}/logo.png"));
    }
}
