//! Authentication documents.

/// Logs in with `$username`, `$password` and `$rememberMe`.
///
/// The result is either a `CurrentUser` or an `ErrorResult` carrying
/// `errorCode` and `message`.
pub const LOGIN_MUTATION: &str = r"
mutation Login($username: String!, $password: String!, $rememberMe: Boolean) {
  login(username: $username, password: $password, rememberMe: $rememberMe) {
    ... on CurrentUser {
      id
      identifier
    }
    ... on ErrorResult {
      errorCode
      message
    }
  }
}
";

/// Ends the current session.
pub const LOGOUT_MUTATION: &str = r"
mutation Logout {
  logout {
    success
  }
}
";

/// Fetches the administrator that owns the current session.
pub const GET_CURRENT_USER: &str = r"
query GetCurrentUser {
  me {
    id
    identifier
    channels {
      id
      code
      token
    }
  }
}
";
