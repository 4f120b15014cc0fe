//! OpenAPI document conversion
//!
//! `/openapi.json` serves the on-disk YAML converted to a JSON object. When
//! no YAML document exists, the response is generated from the declared
//! routes instead, so a bare process still advertises a usable schema.

use serde_json::{json, Value};

/// Convert OpenAPI YAML bytes into a pretty-printed JSON document.
///
/// A parse failure surfaces as a 500 at the route boundary; it is not
/// retried.
pub fn yaml_to_json(yaml: &[u8]) -> Result<String, serde_yaml::Error> {
    let value: Value = serde_yaml::from_slice(yaml)?;
    Ok(serde_json::to_string_pretty(&value).unwrap_or_else(|_| value.to_string()))
}

/// Schema generated from the declared routes, used when no YAML exists.
pub fn generated_schema(base_url: &str) -> Value {
    json!({
        "openapi": "3.1.0",
        "info": {
            "title": "Current Date & Time Tool",
            "version": "1.0.0",
            "description": "API for retrieving the current date and time, or just the date, in UTC."
        },
        "servers": [{ "url": base_url }],
        "paths": {
            "/datetime/current": {
                "get": {
                    "summary": "Get the current UTC date and time (ISO 8601)",
                    "operationId": "getCurrentDatetime",
                    "responses": {
                        "200": {
                            "description": "Successful response with the current UTC date and time.",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "current_datetime_utc": {
                                                "type": "string",
                                                "format": "date-time",
                                                "description": "Current UTC date and time in ISO 8601 format."
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            },
            "/date/current": {
                "get": {
                    "summary": "Get the current UTC date (YYYY-MM-DD format)",
                    "operationId": "getCurrentDate",
                    "responses": {
                        "200": {
                            "description": "Successful response with the current UTC date.",
                            "content": {
                                "application/json": {
                                    "schema": {
                                        "type": "object",
                                        "properties": {
                                            "current_date_utc": {
                                                "type": "string",
                                                "format": "date",
                                                "pattern": r"^\d{4}-\d{2}-\d{2}$",
                                                "description": "Current UTC date in YYYY-MM-DD format."
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_yaml_to_json() {
        let json = yaml_to_json(b"openapi: 3.1.0\ninfo:\n  title: Test\n").expect("valid yaml");
        let value: Value = serde_json::from_str(&json).expect("output is json");
        assert_eq!(value["openapi"], "3.1.0");
        assert_eq!(value["info"]["title"], "Test");
    }

    #[test]
    fn test_yaml_to_json_rejects_malformed_input() {
        assert!(yaml_to_json(b"paths: [unterminated").is_err());
    }

    #[test]
    fn test_generated_schema_reflects_declared_routes() {
        let schema = generated_schema("http://localhost:5000");
        assert_eq!(schema["servers"][0]["url"], "http://localhost:5000");
        assert!(schema["paths"]["/datetime/current"]["get"].is_object());
        let date_schema = &schema["paths"]["/date/current"]["get"]["responses"]["200"]["content"]
            ["application/json"]["schema"]["properties"]["current_date_utc"];
        assert_eq!(date_schema["pattern"], r"^\d{4}-\d{2}-\d{2}$");
    }
}
