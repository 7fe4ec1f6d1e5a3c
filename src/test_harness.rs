//! Shared fixtures for cross-module tests.

use crate::document::{self, Document};
use crate::extract;
use crate::state::{DocMeta, ViewerState};

/// A small 3.1 document with unsorted paths, mixed component kinds and two
/// webhooks. Response codes are deliberately out of order.
pub fn petstore_31_json() -> &'static str {
    r##"{
      "openapi": "3.1.0",
      "info": {"title": "Petstore", "version": "1.0.0"},
      "paths": {
        "/pets/{petId}": {
          "get": {
            "summary": "Get a pet",
            "parameters": [
              {"name": "petId", "in": "path", "description": "pet id", "required": true,
               "schema": {"type": "string", "format": "uuid"}}
            ],
            "responses": {
              "default": {"description": "unexpected error"},
              "200": {"description": "a pet"},
              "404": {"description": "not found"}
            }
          },
          "delete": {
            "summary": "Delete a pet",
            "responses": {"204": {"description": "deleted"}}
          }
        },
        "/pets": {
          "post": {
            "summary": "Create a pet",
            "requestBody": {
              "required": true,
              "content": {
                "application/xml": {"schema": {"type": "object"}},
                "application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}
              }
            },
            "responses": {
              "500": {"description": "server error"},
              "201": {"description": "created"}
            }
          },
          "get": {
            "summary": "List pets",
            "description": "Returns every pet",
            "responses": {"200": {"description": "a paged array of pets"}}
          }
        },
        "/owners": {
          "get": {"summary": "List owners", "responses": {"200": {"description": "owners"}}}
        }
      },
      "components": {
        "schemas": {
          "Pet": {
            "type": "object",
            "description": "A pet",
            "required": ["id", "name"],
            "properties": {
              "name": {"type": "string"},
              "id": {"type": "integer", "format": "int64"},
              "tag": {"type": ["string", "null"]}
            }
          },
          "Error": {
            "type": "object",
            "properties": {"code": {"type": "integer"}, "message": {"type": "string"}}
          }
        },
        "parameters": {
          "limitParam": {"name": "limit", "in": "query", "description": "page size",
                         "schema": {"type": "integer", "format": "int32"}, "example": 20}
        },
        "responses": {
          "NotFound": {"description": "the resource is missing",
                       "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Error"}}}}
        },
        "headers": {
          "X-Rate-Limit": {"description": "requests left", "schema": {"type": "integer"}}
        },
        "requestBodies": {
          "PetBody": {"description": "a pet to add", "required": true,
                      "content": {"application/json": {"schema": {"$ref": "#/components/schemas/Pet"}}}}
        },
        "securitySchemes": {
          "bearerAuth": {"type": "http", "scheme": "bearer", "bearerFormat": "JWT"}
        }
      },
      "webhooks": {
        "pet.deleted": {"post": {"summary": "Pet removed", "operationId": "petDeleted"}},
        "newPet": {"post": {"summary": "New pet added", "operationId": "petAdded",
                            "description": "Fires on creation"}}
      }
    }"##
}

/// The same shape downgraded to 3.0: the webhooks section must be ignored.
pub fn petstore_30_json() -> &'static str {
    r##"{
      "openapi": "3.0.3",
      "info": {"title": "Petstore", "version": "1.0.0"},
      "paths": {
        "/pets": {
          "get": {"summary": "List pets", "responses": {"200": {"description": "ok"}}},
          "post": {"summary": "Create a pet", "responses": {"201": {"description": "created"}}}
        }
      },
      "components": {
        "schemas": {"Pet": {"type": "object"}}
      },
      "webhooks": {
        "newPet": {"post": {"summary": "ignored on 3.0"}}
      }
    }"##
}

/// A syntactically valid document describing nothing at all.
pub fn empty_doc_json() -> &'static str {
    r#"{"openapi": "3.1.0", "info": {"title": "Empty", "version": "0.0.0"}}"#
}

/// Parse a fixture, failing the test on error.
pub fn load_fixture(json: &str) -> Document {
    document::load(json.as_bytes()).expect("fixture document parses")
}

/// Full pipeline: bytes to interactive state.
pub fn state_from(json: &str) -> ViewerState {
    let doc = load_fixture(json);
    let catalog = extract::extract(&doc);
    let meta = DocMeta {
        title: doc.info.title.clone(),
        version: doc.info.version.clone(),
    };
    ViewerState::new(catalog, meta)
}
