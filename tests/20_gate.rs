mod common;

use anyhow::Result;
use reqwest::StatusCode;

use quantogasto_api::auth;

/// The gate must let a correctly signed token through and hand the handler
/// the user id that was baked into it. /auth/whoami needs no database, so
/// this exercises the full middleware path end to end.
#[tokio::test]
async fn valid_token_passes_the_gate() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = auth::generate_token(42, common::TEST_SECRET)?;

    let res = client
        .get(format!("{}/auth/whoami", server.base_url))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::OK);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], true);
    assert_eq!(body["data"]["id"], 42);
    Ok(())
}

#[tokio::test]
async fn corrupted_token_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    // One extra character is enough to break the signature
    let token = auth::generate_token(42, common::TEST_SECRET)?;

    let res = client
        .get(format!("{}/auth/whoami", server.base_url))
        .header("Authorization", format!("Bearer {}x", token))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);

    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["success"], false);
    assert_eq!(body["code"], "UNAUTHORIZED");
    Ok(())
}

#[tokio::test]
async fn missing_header_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/auth/whoami", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn bare_token_without_scheme_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = auth::generate_token(42, common::TEST_SECRET)?;

    let res = client
        .get(format!("{}/auth/whoami", server.base_url))
        .header("Authorization", token)
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

#[tokio::test]
async fn token_signed_with_other_key_is_unauthorized() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = auth::generate_token(42, "some-other-secret")?;

    let res = client
        .get(format!("{}/auth/whoami", server.base_url))
        .header("Authorization", format!("Bearer {}", token))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
    Ok(())
}

/// Every rejection reason must collapse into the same external response, so
/// callers cannot probe which check a candidate token failed.
#[tokio::test]
async fn rejections_are_indistinguishable() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let foreign = auth::generate_token(42, "some-other-secret")?;
    let cases = vec![
        None,
        Some("garbage".to_string()),
        Some("Bearer".to_string()),
        Some("Bearer not-a-jwt".to_string()),
        Some(format!("Bearer {}", foreign)),
    ];

    let mut bodies = Vec::new();
    for case in cases {
        let mut req = client.get(format!("{}/auth/whoami", server.base_url));
        if let Some(header) = case {
            req = req.header("Authorization", header);
        }
        let res = req.send().await?;
        assert_eq!(res.status(), StatusCode::UNAUTHORIZED);
        bodies.push(res.text().await?);
    }

    for body in &bodies[1..] {
        assert_eq!(body, &bodies[0], "rejection bodies must not differ");
    }
    Ok(())
}
