use crate::{AuthError, AuthErrorResult};

use vu_core::Permission;

use std::panic::Location;

use error_location::ErrorLocation;
use http::Method;

/// Fixed method -> capability table. HEAD is treated as GET.
#[track_caller]
pub fn required_permission(method: &Method) -> AuthErrorResult<Permission> {
    match *method {
        Method::GET | Method::HEAD => Ok(Permission::UsersGet),
        Method::POST => Ok(Permission::UsersPost),
        Method::DELETE => Ok(Permission::UsersDelete),
        _ => Err(AuthError::UnsupportedMethod {
            method: method.to_string(),
            location: ErrorLocation::from(Location::caller()),
        }),
    }
}
