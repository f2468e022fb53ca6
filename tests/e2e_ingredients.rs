use axum::http::StatusCode;

mod support;

use support::{PASSWORD, TestApp, location, make_test_app};

struct Kitchen {
    app: TestApp,
    soup_salt: i64,
    stew_beef: i64,
}

/// chef owns "soup" (active onion, hidden salt); rival owns "stew".
fn kitchen() -> Kitchen {
    let app = make_test_app();
    let chef = app.store.seed_user("chef", PASSWORD);
    let rival = app.store.seed_user("rival", PASSWORD);
    let soup = app.store.seed_recipe(chef, "Soup", "soup", &[]);
    let stew = app.store.seed_recipe(rival, "Stew", "stew", &[]);
    app.store.seed_ingredient(soup, "onion", true);
    let soup_salt = app.store.seed_ingredient(soup, "secret salt", false);
    let stew_beef = app.store.seed_ingredient(stew, "beef", true);
    Kitchen {
        app,
        soup_salt: soup_salt.0,
        stew_beef: stew_beef.0,
    }
}

#[tokio::test]
async fn inactive_ingredients_are_only_shown_to_the_author() {
    let k = kitchen();

    let (status, page) = k.app.client().get_text("/recipe/soup/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains("onion"));
    assert!(!page.contains("secret salt"));

    let (_, page) = k.app.logged_in("rival").await.get_text("/recipe/soup/").await;
    assert!(page.contains("onion"));
    assert!(!page.contains("secret salt"));

    let (_, page) = k.app.logged_in("chef").await.get_text("/recipe/soup/").await;
    assert!(page.contains("onion"));
    assert!(page.contains("secret salt"));
    assert!(page.contains(r#"class="inactive""#));
    assert!(page.contains("/recipe/soup/ingredient/create/"));
}

#[tokio::test]
async fn author_adds_ingredient() {
    let k = kitchen();
    let mut chef = k.app.logged_in("chef").await;

    let (status, page) = chef.get_text("/recipe/soup/ingredient/create/").await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"name="is_active""#));

    // An unticked checkbox is simply not submitted.
    let resp = chef
        .post_form(
            "/recipe/soup/ingredient/create/",
            &[("title", "bay leaf"), ("quantity", "2")],
        )
        .await;
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));

    let soup = k.app.store.recipe("soup").unwrap();
    let added = k
        .app
        .store
        .ingredients_of(soup.id)
        .into_iter()
        .find(|i| i.title.as_str() == "bay leaf")
        .unwrap();
    assert!(!added.is_active);
    assert_eq!(added.quantity.unwrap().as_str(), "2");

    let (_, page) = chef.follow(resp).await;
    assert!(page.contains("bay leaf was added."));
}

#[tokio::test]
async fn blank_ingredient_title_rerenders_form() {
    let k = kitchen();
    let mut chef = k.app.logged_in("chef").await;

    let resp = chef
        .post_form("/recipe/soup/ingredient/create/", &[("title", "  ")])
        .await;
    assert_eq!(resp.status(), StatusCode::OK);
    let page = support::body_text(resp).await;
    assert!(page.contains("This field is required."));
}

#[tokio::test]
async fn non_author_cannot_touch_ingredients() {
    let k = kitchen();
    let mut rival = k.app.logged_in("rival").await;
    let salt = k.soup_salt;

    let resp = rival
        .post_form(
            "/recipe/soup/ingredient/create/",
            &[("title", "sugar"), ("is_active", "on")],
        )
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));
    let (_, page) = rival.follow(resp).await;
    assert!(page.contains("You have no enough permissions"));
    assert!(page.contains(r#"class="flash flash-error""#));

    let resp = rival
        .post_form(
            &format!("/recipe/soup/ingredient/{salt}/edit/"),
            &[("title", "sugar"), ("is_active", "on")],
        )
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));

    let resp = rival
        .post_form(&format!("/recipe/soup/ingredient/{salt}/delete/"), &[])
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));

    let resp = rival.get(&format!("/recipe/soup/ingredient/{salt}/edit/")).await;
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));

    let stored = k
        .app
        .store
        .ingredient(cookbook_cms::domain::recipe::IngredientId(salt))
        .unwrap();
    assert_eq!(stored.title.as_str(), "secret salt");
    assert!(!stored.is_active);
}

#[tokio::test]
async fn author_edits_and_deletes_ingredient() {
    let k = kitchen();
    let mut chef = k.app.logged_in("chef").await;
    let salt = k.soup_salt;
    let edit = format!("/recipe/soup/ingredient/{salt}/edit/");

    let (status, page) = chef.get_text(&edit).await;
    assert_eq!(status, StatusCode::OK);
    assert!(page.contains(r#"value="secret salt""#));

    let resp = chef
        .post_form(&edit, &[("title", "sea salt"), ("is_active", "on")])
        .await;
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));
    let id = cookbook_cms::domain::recipe::IngredientId(salt);
    let stored = k.app.store.ingredient(id).unwrap();
    assert_eq!(stored.title.as_str(), "sea salt");
    assert!(stored.is_active);

    let delete = format!("/recipe/soup/ingredient/{salt}/delete/");
    let (status, _) = chef.get_text(&delete).await;
    assert_eq!(status, StatusCode::OK);
    let resp = chef.post_form(&delete, &[]).await;
    assert_eq!(location(&resp).as_deref(), Some("/recipe/soup/"));
    assert!(k.app.store.ingredient(id).is_none());
}

#[tokio::test]
async fn ingredient_of_another_recipe_is_not_found() {
    let k = kitchen();
    let beef = k.stew_beef;
    let edit = format!("/recipe/soup/ingredient/{beef}/edit/");
    let delete = format!("/recipe/soup/ingredient/{beef}/delete/");

    // Neither the owner of the ingredient nor the owner of the recipe in the
    // path may reach it through the wrong recipe.
    for who in ["chef", "rival"] {
        let mut client = k.app.logged_in(who).await;
        assert_eq!(client.get(&edit).await.status(), StatusCode::NOT_FOUND, "{who}");
        let resp = client.post_form(&delete, &[]).await;
        assert_eq!(resp.status(), StatusCode::NOT_FOUND, "{who}");
    }
    let mut anonymous = k.app.client();
    assert_eq!(anonymous.get(&edit).await.status(), StatusCode::NOT_FOUND);

    assert!(
        k.app
            .store
            .ingredient(cookbook_cms::domain::recipe::IngredientId(beef))
            .is_some()
    );
}

#[tokio::test]
async fn malformed_ingredient_id_is_not_found() {
    let k = kitchen();
    let mut chef = k.app.logged_in("chef").await;

    for uri in [
        "/recipe/soup/ingredient/abc/edit/",
        "/recipe/soup/ingredient/0/delete/",
        "/recipe/nope/ingredient/1/edit/",
    ] {
        assert_eq!(chef.get(uri).await.status(), StatusCode::NOT_FOUND, "{uri}");
    }
}
