use crate::Permission;

#[test]
fn test_permission_as_str() {
    assert_eq!(Permission::UsersGet.as_str(), "usersGet");
    assert_eq!(Permission::UsersPost.as_str(), "usersPost");
    assert_eq!(Permission::UsersDelete.as_str(), "usersDelete");
}

#[test]
fn test_permission_displays_as_stored_string() {
    assert_eq!(Permission::UsersDelete.to_string(), "usersDelete");
}
