//! JSON Schemas for the response bodies the contract cases check.
//!
//! Each [`ResponseSchema`] names one document. Documents are built once and
//! compiled once; validation reports every violation, not just the first.

use crate::error::{ContractError, ContractResult};
use crate::logging::log_debug;
use jsonschema::{Draft, Validator};
use once_cell::sync::Lazy;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::fmt;

/// Named response schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum ResponseSchema {
    /// `GET /api/users/{id}` with status 200
    GetSingleUser,
    /// `POST /api/users` with status 201
    CreateUser,
    /// `PUT /api/users/{id}` with status 200
    UpdateUser,
    /// `POST /api/register` with status 200
    RegisterUser,
    /// `POST /api/register` with status 400
    RegisterUnsuccessful,
}

impl ResponseSchema {
    pub const ALL: [ResponseSchema; 5] = [
        Self::GetSingleUser,
        Self::CreateUser,
        Self::UpdateUser,
        Self::RegisterUser,
        Self::RegisterUnsuccessful,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::GetSingleUser => "get_single_user",
            Self::CreateUser => "create_user",
            Self::UpdateUser => "update_user",
            Self::RegisterUser => "register_user",
            Self::RegisterUnsuccessful => "register_unsuccessful",
        }
    }

    /// Look a schema up by its name.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|schema| schema.name() == name)
    }

    /// The JSON Schema document.
    pub fn document(&self) -> &'static Value {
        &DOCUMENTS[self]
    }

    /// Validate `instance` against this schema.
    ///
    /// # Errors
    ///
    /// Returns [`ContractError::SchemaValidationFailed`] listing every
    /// violation, or [`ContractError::ConfigurationError`] if the document
    /// itself fails to compile.
    pub fn validate(&self, instance: &Value) -> ContractResult<()> {
        let validator = match &VALIDATORS[self] {
            Ok(validator) => validator,
            Err(message) => {
                return Err(ContractError::configuration_error(format!(
                    "Schema {} does not compile: {message}",
                    self.name()
                )))
            }
        };

        let violations: Vec<String> = validator
            .iter_errors(instance)
            .map(|error| error.to_string())
            .collect();

        if violations.is_empty() {
            log_debug!(schema = self.name(), "Response matches schema");
            Ok(())
        } else {
            Err(ContractError::schema_validation_failed(
                self.name(),
                violations,
            ))
        }
    }
}

impl fmt::Display for ResponseSchema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

static DOCUMENTS: Lazy<HashMap<ResponseSchema, Value>> = Lazy::new(|| {
    ResponseSchema::ALL
        .into_iter()
        .map(|schema| (schema, build_document(schema)))
        .collect()
});

static VALIDATORS: Lazy<HashMap<ResponseSchema, Result<Validator, String>>> = Lazy::new(|| {
    ResponseSchema::ALL
        .into_iter()
        .map(|schema| {
            let compiled = jsonschema::options()
                .with_draft(Draft::Draft202012)
                .build(schema.document())
                .map_err(|err| err.to_string());
            (schema, compiled)
        })
        .collect()
});

fn build_document(schema: ResponseSchema) -> Value {
    match schema {
        ResponseSchema::GetSingleUser => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "get_single_user",
            "type": "object",
            "required": ["data", "support"],
            "properties": {
                "data": {
                    "type": "object",
                    "required": ["id", "email", "first_name", "last_name", "avatar"],
                    "properties": {
                        "id": { "type": "integer" },
                        "email": { "type": "string" },
                        "first_name": { "type": "string" },
                        "last_name": { "type": "string" },
                        "avatar": { "type": "string" }
                    }
                },
                "support": {
                    "type": "object",
                    "required": ["url", "text"],
                    "properties": {
                        "url": { "type": "string" },
                        "text": { "type": "string" }
                    }
                }
            }
        }),
        ResponseSchema::CreateUser => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "create_user",
            "type": "object",
            "required": ["name", "job", "id", "createdAt"],
            "properties": {
                "name": { "type": "string" },
                "job": { "type": "string" },
                "id": { "type": "string" },
                "createdAt": { "type": "string" }
            }
        }),
        ResponseSchema::UpdateUser => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "update_user",
            "type": "object",
            "required": ["name", "job", "updatedAt"],
            "properties": {
                "name": { "type": "string" },
                "job": { "type": "string" },
                "updatedAt": { "type": "string" }
            }
        }),
        ResponseSchema::RegisterUser => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "register_user",
            "type": "object",
            "required": ["id", "token"],
            "properties": {
                "id": { "type": "integer" },
                "token": { "type": "string" }
            }
        }),
        ResponseSchema::RegisterUnsuccessful => json!({
            "$schema": "https://json-schema.org/draft/2020-12/schema",
            "title": "register_unsuccessful",
            "type": "object",
            "required": ["error"],
            "properties": {
                "error": { "type": "string" }
            }
        }),
    }
}
