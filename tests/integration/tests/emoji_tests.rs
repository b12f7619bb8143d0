//! Emoji integration tests
//!
//! Exercise resolution, validation, and administration against the bundled
//! sample catalog in `data/emoji`.
//!
//! Run with: cargo test -p integration-tests --test emoji_tests

use emoji_common::{AppError, CatalogConfig, EmojiConfig, ErrorResponse};
use emoji_core::{DomainError, EmojiType};
use emoji_service::dto::{AddReactionRequest, CreateCustomEmojiRequest};
use emoji_service::{
    check_valid_emoji_name, CatalogError, EmojiAdminService, EmojiCatalog, EmojiContext,
    EmojiResolver, EmojiService, ReactionService, ReactionValidator,
};
use integration_tests::{data_dir, test_context, write_catalog, TestRealm};

fn domain_err<T: std::fmt::Debug>(result: emoji_service::ServiceResult<T>) -> DomainError {
    result.unwrap_err().as_domain().cloned().expect("expected a domain error")
}

// ============================================================================
// Catalog Tests
// ============================================================================

#[test]
fn test_bundled_catalog_is_consistent() {
    let catalog = integration_tests::bundled_catalog().unwrap();
    assert!(!catalog.is_empty());

    assert_eq!(catalog.codepoint_for("+1"), Some("1f44d"));
    assert_eq!(catalog.codepoint_for("thumbs_up"), Some("1f44d"));
    assert_eq!(catalog.name_for("1f44d"), Some("+1"));
    assert_eq!(catalog.codepoint_for("flag_japan"), Some("1f1ef-1f1f5"));
}

#[test]
fn test_context_from_config() {
    let data = data_dir();
    let data = data.to_str().unwrap().to_string();
    let config = EmojiConfig::from_lookup(|key| match key {
        "EMOJI_DATA_DIR" => Some(data.clone()),
        _ => None,
    })
    .unwrap();

    let ctx = EmojiContext::from_config(&config).unwrap();
    assert_eq!(ctx.catalog().codepoint_for("tada"), Some("1f389"));
}

#[test]
fn test_missing_catalog_is_fatal() {
    let config = EmojiConfig::from_lookup(|key| match key {
        "EMOJI_DATA_DIR" => Some("/nonexistent/emoji".to_string()),
        _ => None,
    })
    .unwrap();

    let err = EmojiContext::from_config(&config).unwrap_err();
    assert_eq!(err.status_code(), 500);
    let app: AppError = err.into();
    assert_eq!(app.status_code(), 500);
    assert_eq!(ErrorResponse::from(app).msg, "Internal server error");
}

#[test]
fn test_malformed_catalog_is_fatal() {
    let dir = write_catalog(r#"{"smile": 1}"#, r#"{"1f604": "smile"}"#).unwrap();
    let err = EmojiCatalog::load(&CatalogConfig::in_dir(dir)).unwrap_err();
    assert!(matches!(err, CatalogError::Malformed { .. }));
}

// ============================================================================
// Resolution Tests
// ============================================================================

#[test]
fn test_custom_emoji_takes_precedence() {
    let ctx = test_context().unwrap();
    let mut test = TestRealm::new();
    let hamlet = test.hamlet.clone();
    for name in ["tada", "zulip", "party_parrot"] {
        test.add_emoji(name, Some(&hamlet));
    }

    let resolver = EmojiResolver::new(&ctx);
    for name in ["tada", "zulip", "party_parrot"] {
        let resolved = resolver.resolve(&test.realm, name).unwrap();
        assert_eq!(resolved.emoji_code, name);
        assert_eq!(resolved.emoji_type, EmojiType::CustomEmoji);
    }
}

#[test]
fn test_extra_and_unicode_emoji() {
    let ctx = test_context().unwrap();
    let test = TestRealm::new();
    let resolver = EmojiResolver::new(&ctx);

    let resolved = resolver.resolve(&test.realm, "zulip").unwrap();
    assert_eq!(resolved.emoji_code, "zulip");
    assert_eq!(resolved.emoji_type, EmojiType::ExtraEmoji);

    for name in ["+1", "like", "heart", "keycap_zero"] {
        let resolved = resolver.resolve(&test.realm, name).unwrap();
        assert_eq!(Some(resolved.emoji_code.as_str()), ctx.catalog().codepoint_for(name));
        assert_eq!(resolved.emoji_type, EmojiType::UnicodeEmoji);
    }

    assert_eq!(
        domain_err(resolver.resolve(&test.realm, "definitely-not-an-emoji-xyz")),
        DomainError::EmojiNotFound("definitely-not-an-emoji-xyz".to_string())
    );
}

#[test]
fn test_deactivated_emoji_stops_shadowing() {
    let ctx = test_context().unwrap();
    let mut test = TestRealm::new();
    test.add_emoji("fire", None);
    let resolver = EmojiResolver::new(&ctx);

    assert_eq!(
        resolver.resolve(&test.realm, "fire").unwrap().emoji_type,
        EmojiType::CustomEmoji
    );

    test.realm.deactivate_emoji("fire");
    let resolved = resolver.resolve(&test.realm, "fire").unwrap();
    assert_eq!(resolved.emoji_code, "1f525");
    assert_eq!(resolved.emoji_type, EmojiType::UnicodeEmoji);

    // The validator still finds it, and says why it is refused
    assert_eq!(
        domain_err(ReactionValidator::new(&ctx).validate_reaction(
            &test.realm,
            "fire",
            "fire",
            "custom_emoji"
        )),
        DomainError::DeactivatedEmoji
    );
}

// ============================================================================
// Reaction Tests
// ============================================================================

#[test]
fn test_validate_extra_emoji_triples() {
    let ctx = test_context().unwrap();
    let test = TestRealm::new();
    let validator = ReactionValidator::new(&ctx);

    assert!(validator
        .validate_reaction(&test.realm, "zulip", "zulip", "extra_emoji")
        .is_ok());
    assert_eq!(
        domain_err(validator.validate_reaction(&test.realm, "notzulip", "zulip", "extra_emoji")),
        DomainError::InvalidEmojiName
    );
}

#[test]
fn test_every_resolved_reaction_validates() {
    let ctx = test_context().unwrap();
    let mut test = TestRealm::new();
    test.add_emoji("party_parrot", None);
    let service = ReactionService::new(&ctx);

    for name in ["party_parrot", "zulip", "+1", "thumbs_up", "working_on_it", "flag_japan"] {
        let reaction = service
            .build_reaction(&test.realm, &AddReactionRequest::by_name(name))
            .unwrap();
        assert_eq!(reaction.emoji_name, name);

        // And the stored triple survives a client round trip
        let json = serde_json::to_string(&reaction).unwrap();
        let request: AddReactionRequest = serde_json::from_str(&json).unwrap();
        assert_eq!(service.build_reaction(&test.realm, &request).unwrap(), reaction);
    }
}

#[test]
fn test_reaction_error_reaches_client_as_bad_request() {
    let ctx = test_context().unwrap();
    let test = TestRealm::new();

    let err = ReactionService::new(&ctx)
        .build_reaction(
            &test.realm,
            &AddReactionRequest::with_code("smile", "1f44d", Some("unicode_emoji")),
        )
        .unwrap_err();
    let app: AppError = err.into();
    assert_eq!(app.status_code(), 400);

    let body = serde_json::to_value(ErrorResponse::from(app)).unwrap();
    assert_eq!(body["result"], "error");
    assert_eq!(body["msg"], "Invalid emoji name.");
}

// ============================================================================
// Administration Tests
// ============================================================================

#[test]
fn test_author_and_admin_removal() {
    let ctx = test_context().unwrap();
    let mut test = TestRealm::new();
    let (hamlet, othello) = (test.hamlet.clone(), test.othello.clone());
    test.add_emoji("foo", Some(&hamlet));
    test.add_emoji("bar", Some(&othello));
    let admin = EmojiAdminService::new(&ctx);

    assert!(admin.check_emoji_admin(&hamlet, &test.realm, Some("foo")).is_ok());
    assert_eq!(
        domain_err(admin.check_emoji_admin(&hamlet, &test.realm, Some("bar"))),
        DomainError::MustBeAdminOrEmojiAuthor
    );
    for name in ["foo", "bar"] {
        assert!(admin.check_remove_custom_emoji(&test.admin, &test.realm, name).is_ok());
    }

    test.realm.set_restrict_emoji_creation_to_admins(true);
    assert_eq!(
        domain_err(admin.check_emoji_admin(&hamlet, &test.realm, Some("foo"))),
        DomainError::MustBeOrganizationAdmin
    );
}

#[test]
fn test_add_custom_emoji_flow() {
    let ctx = test_context().unwrap();
    let mut test = TestRealm::new();
    let hamlet = test.hamlet.clone();
    let admin = EmojiAdminService::new(&ctx);

    let request = CreateCustomEmojiRequest {
        name: "party_parrot".to_string(),
        file_name: "/tmp/uploads/parrot.gif".to_string(),
    };
    let new_emoji = admin.check_add_custom_emoji(&hamlet, &test.realm, &request).unwrap();
    assert_eq!(new_emoji.file_name, "party_parrot.gif");

    let stored = test.add_emoji("party_parrot", Some(&hamlet)).clone();
    let described = EmojiService::new(&ctx).describe(&test.realm, &stored);
    assert_eq!(
        described.source_url,
        format!(
            "http://localhost:9991/user_avatars/{}/emoji/party_parrot.png",
            test.realm.id
        )
    );

    // The same name cannot be added twice
    assert_eq!(
        domain_err(admin.check_add_custom_emoji(&test.othello, &test.realm, &request)),
        DomainError::EmojiNameTaken
    );
}

#[test]
fn test_naming_policy() {
    for name in ["thumbs-up", "smile_2", "v1.0"] {
        assert!(check_valid_emoji_name(name).is_ok());
    }
    for name in ["bad-", "bad_", "bad.", "Bad", "has space"] {
        assert_eq!(
            check_valid_emoji_name(name),
            Err(DomainError::InvalidEmojiNameCharacters)
        );
    }
}

// ============================================================================
// Concurrency Tests
// ============================================================================

#[test]
fn test_shared_context_across_threads() {
    let ctx = test_context().unwrap();
    let mut test = TestRealm::new();
    test.add_emoji("party_parrot", None);
    let realm = &test.realm;

    std::thread::scope(|scope| {
        for _ in 0..8 {
            let ctx = ctx.clone();
            scope.spawn(move || {
                let resolver = EmojiResolver::new(&ctx);
                let validator = ReactionValidator::new(&ctx);
                for _ in 0..100 {
                    let resolved = resolver.resolve(realm, "+1").unwrap();
                    assert_eq!(resolved.emoji_code, "1f44d");
                    validator
                        .validate_reaction(realm, "party_parrot", "party_parrot", "custom_emoji")
                        .unwrap();
                }
            });
        }
    });
}
