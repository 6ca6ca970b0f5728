//! # Integration Tests
//!
//! End-to-end flows across signup, login, logout, and the protected routes,
//! including the bearer-token middleware failure paths.

use super::*;

use shared::UserResponse;

#[tokio::test]
async fn test_signup_then_login() {
    // Arrange
    let pool = setup_test_db().await;
    let config = test_config();

    let signup_app = test_app(pool.clone(), config.clone());
    let signup_req = SignupRequest {
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        password: "TestPassword123!".to_string(),
        first_name: None,
        last_name: None,
    };

    let signup_response = signup_app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/signup")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&signup_req).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(signup_response.status(), StatusCode::CREATED);

    let login_app = test_app(pool, config);
    let login_req = LoginRequest {
        email_or_username: "test@example.com".to_string(),
        password: "TestPassword123!".to_string(),
    };

    // Act
    let login_response = login_app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/login")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&login_req).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(login_response.status(), StatusCode::OK);

    let auth_response: AuthResponse = response_json(login_response).await;

    assert_eq!(auth_response.user.username, "testuser");
    assert_eq!(auth_response.message, "Login successful");
}

#[tokio::test]
async fn test_signup_token_grants_access() {
    // Arrange
    let pool = setup_test_db().await;
    let config = test_config();

    let signup_app = test_app(pool.clone(), config.clone());
    let signup_req = SignupRequest {
        username: "testuser".to_string(),
        email: "test@example.com".to_string(),
        password: "TestPassword123!".to_string(),
        first_name: None,
        last_name: None,
    };

    let signup_response = signup_app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/signup")
                .header("content-type", "application/json")
                .body(Body::from(serde_json::to_string(&signup_req).unwrap()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(signup_response.status(), StatusCode::CREATED);
    let auth_response: AuthResponse = response_json(signup_response).await;

    // Act: use the signup token on a protected route.
    let user_app = test_app(pool, config);
    let user_response = user_app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user")
                .header("authorization", format!("Bearer {}", auth_response.token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(user_response.status(), StatusCode::OK);

    let user_response: UserResponse = response_json(user_response).await;

    assert_eq!(user_response.user.username, "testuser");
    assert_eq!(user_response.user.id, auth_response.user.id);
}

#[tokio::test]
async fn test_logout_with_valid_token() {
    // Arrange
    let pool = setup_test_db().await;
    let config = test_config();
    let user = seed_user(&pool, "testuser", "test@example.com", "TestPassword123!").await;

    let token = encode_jwt(
        user.id,
        user.username.clone(),
        &config.jwt_secret,
        config.jwt_expiration_hours,
    )
    .expect("Token encoding should succeed in test");

    let app = test_app(pool, config);

    // Act
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .header("authorization", format!("Bearer {}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);

    let logout_response: LogoutResponse = response_json(response).await;

    assert_eq!(logout_response.message, "Logout successful");
}

#[tokio::test]
async fn test_logout_without_token() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    // Act
    let response = app
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/api/auth/logout")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error_response: ErrorResponse = response_json(response).await;

    assert_eq!(error_response.error, "Missing authentication token");
}

#[tokio::test]
async fn test_protected_route_with_garbage_token() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    // Act
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user")
                .header("authorization", "Bearer not-a-real-token")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error_response: ErrorResponse = response_json(response).await;

    assert_eq!(error_response.error, "Invalid or expired token");
}

#[tokio::test]
async fn test_protected_route_with_malformed_header() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    // Act: header present but not in "Bearer <token>" form.
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/user")
                .header("authorization", "Token abc123")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);

    let error_response: ErrorResponse = response_json(response).await;

    assert_eq!(error_response.error, "Invalid authorization header");
}

#[tokio::test]
async fn test_health_endpoint() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    // Act
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/health")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::OK);
}

#[tokio::test]
async fn test_unknown_route_falls_back_to_404() {
    // Arrange
    let pool = setup_test_db().await;
    let app = test_app(pool, test_config());

    // Act
    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/api/does-not-exist")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    // Assert
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
