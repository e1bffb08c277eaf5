use carelog::db::Store;
use carelog_schema::UserForm;
use std::collections::hash_map::DefaultHasher;
use std::hash::{Hash, Hasher};
use std::time::SystemTime;
use tokio::fs;

async fn temp_store(tag: &str) -> (Store, std::path::PathBuf) {
    let tmp_dir = std::env::temp_dir();
    let mut hasher = DefaultHasher::new();
    SystemTime::now().hash(&mut hasher);
    let db_path = tmp_dir.join(format!("carelog_{tag}_{}.sqlite", hasher.finish()));
    let database_url = format!("sqlite:{}", db_path.to_str().unwrap());

    let store = Store::connect(&database_url).await.unwrap();
    store.init_schema().await.unwrap();
    (store, db_path)
}

async fn cleanup(db_path: &std::path::Path) {
    let wal_path = std::path::PathBuf::from(format!("{}-wal", db_path.to_string_lossy()));
    let shm_path = std::path::PathBuf::from(format!("{}-shm", db_path.to_string_lossy()));
    let _ = fs::remove_file(&wal_path).await;
    let _ = fs::remove_file(&shm_path).await;
    fs::remove_file(db_path).await.unwrap();
}

#[tokio::test]
async fn test_user_store_baseline() {
    let (store, db_path) = temp_store("users_baseline").await;

    // 1. Fresh database lists no users.
    let users = store.list_users().await.unwrap();
    assert!(users.is_empty(), "Expected no users initially");

    // 2. Create, then list exactly one row matching the submitted fields.
    let id = store
        .insert_user(UserForm {
            name: "Ali".to_string(),
            phone_number: Some("0300-1234567".to_string()),
            email: Some("ali786@gmail.com".to_string()),
        })
        .await
        .unwrap();
    assert!(id > 0, "Expected a valid ID after creation");

    let users = store.list_users().await.unwrap();
    assert_eq!(users.len(), 1, "Expected one user after insert");
    assert_eq!(users[0].user_id, id);
    assert_eq!(users[0].name, "Ali");
    assert_eq!(users[0].phone_number.as_deref(), Some("0300-1234567"));
    assert_eq!(users[0].email.as_deref(), Some("ali786@gmail.com"));

    // 3. Full-row update is reflected on the next list, old values gone.
    let touched = store
        .update_user(
            id,
            UserForm {
                name: "Ali Khan".to_string(),
                phone_number: Some("0300-7654321".to_string()),
                email: Some("ali786@gmail.com".to_string()),
            },
        )
        .await
        .unwrap();
    assert_eq!(touched, 1);

    let users = store.list_users().await.unwrap();
    assert_eq!(users[0].name, "Ali Khan");
    assert_eq!(users[0].phone_number.as_deref(), Some("0300-7654321"));

    // 4. Updating a missing id touches nothing.
    let touched = store
        .update_user(
            9999,
            UserForm {
                name: "Nobody".to_string(),
                phone_number: None,
                email: None,
            },
        )
        .await
        .unwrap();
    assert_eq!(touched, 0);

    // 5. Delete removes the row; deleting again is a no-op.
    assert_eq!(store.delete_user(id).await.unwrap(), 1);
    assert!(store.list_users().await.unwrap().is_empty());
    assert_eq!(store.delete_user(id).await.unwrap(), 0);

    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_duplicate_email_leaves_table_unchanged() {
    let (store, db_path) = temp_store("users_unique").await;

    store
        .insert_user(UserForm {
            name: "Iqra".to_string(),
            phone_number: Some("0312-6543210".to_string()),
            email: Some("iqra2025@gmail.com".to_string()),
        })
        .await
        .unwrap();

    let before = store.list_users().await.unwrap();

    let result = store
        .insert_user(UserForm {
            name: "Impostor".to_string(),
            phone_number: None,
            email: Some("iqra2025@gmail.com".to_string()),
        })
        .await;
    assert!(result.is_err(), "Expected a uniqueness violation");

    let after = store.list_users().await.unwrap();
    assert_eq!(before, after, "Failed insert must not change the table");

    cleanup(&db_path).await;
}

#[tokio::test]
async fn test_users_without_email_do_not_collide() {
    let (store, db_path) = temp_store("users_null_email").await;

    // UNIQUE only applies when the email is present; NULLs coexist.
    for name in ["Walk-in A", "Walk-in B"] {
        store
            .insert_user(UserForm {
                name: name.to_string(),
                phone_number: None,
                email: None,
            })
            .await
            .unwrap();
    }

    assert_eq!(store.list_users().await.unwrap().len(), 2);

    cleanup(&db_path).await;
}
