mod common;

use anyhow::Result;
use reqwest::StatusCode;
use serde_json::json;

#[tokio::test]
async fn mutation_routes_require_a_token() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let create = client
        .post(format!("{}/post/create", server.base_url))
        .json(&json!({ "title": "t", "content": "c", "tags": [], "category": "space" }))
        .send()
        .await?;
    assert_eq!(create.status(), StatusCode::UNAUTHORIZED);

    let edit = client
        .put(format!("{}/post/edit", server.base_url))
        .json(&json!({ "post_id": "x", "field": "title", "data": "t" }))
        .send()
        .await?;
    assert_eq!(edit.status(), StatusCode::UNAUTHORIZED);

    let delete = client
        .delete(format!(
            "{}/post/posts/00000000-0000-0000-0000-000000000000",
            server.base_url
        ))
        .send()
        .await?;
    assert_eq!(delete.status(), StatusCode::UNAUTHORIZED);

    let myposts = client
        .get(format!("{}/post/myposts", server.base_url))
        .send()
        .await?;
    assert_eq!(myposts.status(), StatusCode::UNAUTHORIZED);

    Ok(())
}

#[tokio::test]
async fn get_rejects_non_uuid_ids() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!("{}/post/get?post_id=not-a-uuid", server.base_url))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Invalid post id");
    Ok(())
}

#[tokio::test]
async fn edit_rejects_unknown_field_selectors() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::forge_token("nova", common::TEST_JWT_SECRET, 3600);
    let res = client
        .put(format!("{}/post/edit", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "post_id": "00000000-0000-0000-0000-000000000000",
            "field": "author",
            "data": "eve"
        }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["message"], "Invalid field to edit");
    Ok(())
}

#[tokio::test]
async fn edit_rejects_non_uuid_post_ids() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let token = common::forge_token("nova", common::TEST_JWT_SECRET, 3600);
    let res = client
        .put(format!("{}/post/edit", server.base_url))
        .bearer_auth(&token)
        .json(&json!({ "post_id": "42", "field": "title", "data": "t" }))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    Ok(())
}

#[tokio::test]
async fn files_route_refuses_traversal() -> Result<()> {
    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let res = client
        .get(format!(
            "{}/post/files/..%2F..%2Fetc%2Fpasswd",
            server.base_url
        ))
        .send()
        .await?;

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
    Ok(())
}

/// Create -> read -> edit -> ownership denial -> delete. Needs a live
/// database.
#[tokio::test]
async fn post_lifecycle_flow() -> Result<()> {
    if !common::database_available() {
        return Ok(());
    }

    let server = common::ensure_server().await?;
    let client = reqwest::Client::new();

    let suffix = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)?
        .as_millis();
    let username = format!("astro{}", suffix);

    // Register the author so the posts.author foreign key is satisfied
    let res = client
        .post(format!("{}/auth/signup", server.base_url))
        .json(&json!({
            "username": username,
            "password": "rocket1",
            "email": format!("{}@x.com", username)
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);

    let res = client
        .post(format!("{}/auth/login", server.base_url))
        .json(&json!({ "username": username, "password": "rocket1" }))
        .send()
        .await?;
    let token = res.json::<serde_json::Value>().await?["data"]["token"]
        .as_str()
        .expect("token")
        .to_string();

    // Create
    let res = client
        .post(format!("{}/post/create", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "title": format!("Voyager {}", suffix),
            "content": "Still going.",
            "tags": ["probes", "deep-space"],
            "category": "space"
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::CREATED);
    let body = res.json::<serde_json::Value>().await?;
    let post_id = body["data"]["id"].as_str().expect("post id").to_string();

    // Read back by id
    let res = client
        .get(format!("{}/post/get?post_id={}", server.base_url, post_id))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["author"], username.as_str());
    assert_eq!(body["data"]["category"], "space");

    // Listed under the author
    let res = client
        .get(format!(
            "{}/post/get-by-author?author={}",
            server.base_url, username
        ))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"].as_array().map(|a| a.len()), Some(1));

    // Edit one field as the owner
    let res = client
        .put(format!("{}/post/edit", server.base_url))
        .bearer_auth(&token)
        .json(&json!({
            "post_id": post_id,
            "field": "content",
            "data": "Still going, 25 billion km out."
        }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    // Another principal's token is denied and the post survives
    let stranger = common::forge_token("stranger", common::TEST_JWT_SECRET, 3600);
    let res = client
        .delete(format!("{}/post/posts/{}", server.base_url, post_id))
        .bearer_auth(&stranger)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .put(format!("{}/post/edit", server.base_url))
        .bearer_auth(&stranger)
        .json(&json!({ "post_id": post_id, "field": "title", "data": "stolen" }))
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    let res = client
        .get(format!("{}/post/get?post_id={}", server.base_url, post_id))
        .send()
        .await?;
    let body = res.json::<serde_json::Value>().await?;
    assert_eq!(body["data"]["content"], "Still going, 25 billion km out.");
    assert_ne!(body["data"]["title"], "stolen");

    // The owner can delete; a second delete finds nothing
    let res = client
        .delete(format!("{}/post/posts/{}", server.base_url, post_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::OK);

    let res = client
        .delete(format!("{}/post/posts/{}", server.base_url, post_id))
        .bearer_auth(&token)
        .send()
        .await?;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    Ok(())
}
