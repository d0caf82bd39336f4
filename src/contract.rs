//! Contract cases for the reqres user-management API.
//!
//! Each case issues exactly one request through a [`UserService`] and checks
//! the status first. Bodies are decoded into their typed model: field values
//! are compared on the model before the schema runs, and cases with no field
//! checks run the schema before decoding. The first failing check ends the case.
//!
//! Several cases assume the service already holds user 2 (Janet Weaver) and
//! user 7 (Michael Lawson) on page 2. Nothing here provisions or restores
//! those records; against a real stateful backend the update and delete
//! cases would need fixtures of their own.

use crate::client::UserService;
use crate::error::{ContractError, ContractResult};
use crate::logging::log_debug;
use crate::models::{
    ApiErrorBody, CreatedUser, Credentials, RegisterSuccess, SingleUser, UpdatedUser, User,
    UserPage, UserPayload,
};
use crate::schemas::ResponseSchema;
use serde::Serialize;
use std::fmt;

// ============================================================================
// Fixtures
// ============================================================================

/// Page requested by the listing cases.
pub const LIST_PAGE: u32 = 2;

/// Pre-seeded user read, updated and deleted by the single-user cases.
pub const KNOWN_USER_ID: u32 = 2;
pub const KNOWN_USER_EMAIL: &str = "janet.weaver@reqres.in";
pub const KNOWN_USER_FIRST_NAME: &str = "Janet";
pub const KNOWN_USER_LAST_NAME: &str = "Weaver";

/// Id with no backing resource under `/api/unknown/`.
pub const MISSING_RESOURCE_ID: u32 = 23;

/// Payload for the create and update cases.
pub const NEW_USER_NAME: &str = "vicky";
pub const NEW_USER_JOB: &str = "teacher";

/// Credentials the service accepts for registration.
pub const REGISTER_EMAIL: &str = "eve.holt@reqres.in";
pub const REGISTER_PASSWORD: &str = "pistol";

/// User expected somewhere on [`LIST_PAGE`].
pub const LISTED_USER_ID: u32 = 7;
pub const LISTED_USER_EMAIL: &str = "michael.lawson@reqres.in";
pub const LISTED_USER_LAST_NAME: &str = "Lawson";

// ============================================================================
// Cases
// ============================================================================

/// One contract check against the remote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ContractCase {
    ListUsers,
    GetSingleUser,
    GetSingleUserNotFound,
    CreateUser,
    UpdateUser,
    DeleteUser,
    RegisterSuccess,
    RegisterFailure,
    UserIsListed,
}

impl ContractCase {
    /// Every case, in the order the suite runs them.
    pub const ALL: [ContractCase; 9] = [
        Self::ListUsers,
        Self::GetSingleUser,
        Self::GetSingleUserNotFound,
        Self::CreateUser,
        Self::UpdateUser,
        Self::DeleteUser,
        Self::RegisterSuccess,
        Self::RegisterFailure,
        Self::UserIsListed,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::ListUsers => "list_users",
            Self::GetSingleUser => "get_single_user",
            Self::GetSingleUserNotFound => "get_single_user_not_found",
            Self::CreateUser => "create_user",
            Self::UpdateUser => "update_user",
            Self::DeleteUser => "delete_user",
            Self::RegisterSuccess => "register_user_success",
            Self::RegisterFailure => "register_user_unsuccessful",
            Self::UserIsListed => "check_single_user_is_on_the_list",
        }
    }

    /// Whether running the case changes remote state.
    pub fn is_mutating(&self) -> bool {
        matches!(self, Self::CreateUser | Self::UpdateUser | Self::DeleteUser)
    }

    /// Run the case against `service`.
    pub async fn run(&self, service: &dyn UserService) -> ContractResult<()> {
        log_debug!(case = self.name(), "Running contract case");
        match self {
            Self::ListUsers => list_users(service).await,
            Self::GetSingleUser => get_single_user(service).await,
            Self::GetSingleUserNotFound => get_single_user_not_found(service).await,
            Self::CreateUser => create_user(service).await,
            Self::UpdateUser => update_user(service).await,
            Self::DeleteUser => delete_user(service).await,
            Self::RegisterSuccess => register_user_success(service).await,
            Self::RegisterFailure => register_user_unsuccessful(service).await,
            Self::UserIsListed => user_is_listed(service).await,
        }
    }
}

impl fmt::Display for ContractCase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// `GET /api/users?page=2` answers 200 and echoes the page number.
pub async fn list_users(service: &dyn UserService) -> ContractResult<()> {
    let response = service.list_users(LIST_PAGE).await?;
    response.expect_status(200)?;

    let page: UserPage = response.parse()?;
    expect_field("page", LIST_PAGE, page.page)
}

/// `GET /api/users/2` returns Janet Weaver in the single-user shape.
pub async fn get_single_user(service: &dyn UserService) -> ContractResult<()> {
    let response = service.get_user(KNOWN_USER_ID).await?;
    response.expect_status(200)?;

    let user = response.parse::<SingleUser>()?.data;
    expect_field("data.email", KNOWN_USER_EMAIL, user.email.as_str())?;
    expect_field("data.first_name", KNOWN_USER_FIRST_NAME, user.first_name.as_str())?;
    expect_field("data.last_name", KNOWN_USER_LAST_NAME, user.last_name.as_str())?;

    response.validate(ResponseSchema::GetSingleUser)?;

    log_debug!(user_id = user.id, "Fetched known user");
    Ok(())
}

/// `GET /api/unknown/23` answers 404.
pub async fn get_single_user_not_found(service: &dyn UserService) -> ContractResult<()> {
    let response = service.get_unknown(MISSING_RESOURCE_ID).await?;
    response.expect_status(404)?;
    Ok(())
}

/// `POST /api/users` answers 201 with the created-user shape.
pub async fn create_user(service: &dyn UserService) -> ContractResult<()> {
    let payload = UserPayload::new(NEW_USER_NAME, NEW_USER_JOB);
    let response = service.create_user(&payload).await?;
    response.expect_status(201)?;

    response.validate(ResponseSchema::CreateUser)?;

    let created: CreatedUser = response.parse()?;
    log_debug!(
        user_id = %created.id,
        created_at = %created.created_at,
        "Created user"
    );
    Ok(())
}

/// `PUT /api/users/2` answers 200 with the updated-user shape.
pub async fn update_user(service: &dyn UserService) -> ContractResult<()> {
    let payload = UserPayload::new(NEW_USER_NAME, NEW_USER_JOB);
    let response = service.update_user(KNOWN_USER_ID, &payload).await?;
    response.expect_status(200)?;

    response.validate(ResponseSchema::UpdateUser)?;

    let updated: UpdatedUser = response.parse()?;
    log_debug!(updated_at = %updated.updated_at, "Updated known user");
    Ok(())
}

/// `DELETE /api/users/2` answers 204; the body is not inspected.
pub async fn delete_user(service: &dyn UserService) -> ContractResult<()> {
    let response = service.delete_user(KNOWN_USER_ID).await?;
    response.expect_status(204)?;
    Ok(())
}

/// Registering with email and password answers 200 with an id and token.
pub async fn register_user_success(service: &dyn UserService) -> ContractResult<()> {
    let credentials = Credentials::new(REGISTER_EMAIL, REGISTER_PASSWORD);
    let response = service.register(&credentials).await?;
    response.expect_status(200)?;

    response.validate(ResponseSchema::RegisterUser)?;

    let registered: RegisterSuccess = response.parse()?;
    log_debug!(user_id = registered.id, "Registered user");
    Ok(())
}

/// Registering without an email answers 400 with an error message.
pub async fn register_user_unsuccessful(service: &dyn UserService) -> ContractResult<()> {
    let credentials = Credentials::password_only(REGISTER_PASSWORD);
    let response = service.register(&credentials).await?;
    response.expect_status(400)?;

    response.validate(ResponseSchema::RegisterUnsuccessful)?;

    let rejection: ApiErrorBody = response.parse()?;
    log_debug!(error = %rejection.error, "Registration rejected");
    Ok(())
}

/// Page 2 of the listing includes Michael Lawson.
pub async fn user_is_listed(service: &dyn UserService) -> ContractResult<()> {
    let response = service.list_users(LIST_PAGE).await?;
    response.expect_status(200)?;

    let page: UserPage = response.parse()?;
    let found = page.find(is_listed_user).is_some();

    if found {
        Ok(())
    } else {
        Err(ContractError::assertion_failed(format!(
            "no user with id {LISTED_USER_ID}, email {LISTED_USER_EMAIL} and last name \
             {LISTED_USER_LAST_NAME} on page {LIST_PAGE} ({} users listed)",
            page.data.len()
        )))
    }
}

fn is_listed_user(user: &User) -> bool {
    user.id == LISTED_USER_ID
        && user.email == LISTED_USER_EMAIL
        && user.last_name == LISTED_USER_LAST_NAME
}

/// Compare a decoded field with its expected value.
///
/// `field` is the dotted path reported on mismatch; both values are rendered
/// as JSON.
pub fn expect_field<T>(field: &str, expected: T, actual: T) -> ContractResult<()>
where
    T: PartialEq + Serialize,
{
    if actual == expected {
        Ok(())
    } else {
        Err(ContractError::field_mismatch(
            field,
            render(&expected),
            render(&actual),
        ))
    }
}

fn render(value: &impl Serialize) -> String {
    serde_json::to_string(value).unwrap_or_default()
}
