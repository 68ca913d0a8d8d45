use anyhow::Context;
use bcrypt::{hash, verify};
use tracing::error;

/// bcrypt work factor for passwords and CVVs.
pub const BCRYPT_COST: u32 = 10;

/// Salted bcrypt hash of `plain`, computed on the blocking pool.
pub async fn hash_secret(plain: String) -> anyhow::Result<String> {
    let hashed = tokio::task::spawn_blocking(move || hash(plain, BCRYPT_COST))
        .await
        .context("bcrypt hash task")?
        .map_err(|e| {
            error!(error = %e, "bcrypt hash error");
            anyhow::anyhow!(e)
        })?;
    Ok(hashed)
}

/// Checks `plain` against a stored bcrypt hash. A malformed hash is an error.
pub async fn verify_secret(plain: String, hashed: String) -> anyhow::Result<bool> {
    let ok = tokio::task::spawn_blocking(move || verify(plain, &hashed))
        .await
        .context("bcrypt verify task")??;
    Ok(ok)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_verify_roundtrip() {
        let password = "Secur3P@ssw0rd!";
        let hashed = hash_secret(password.into()).await.expect("hashing should succeed");
        assert_ne!(hashed, password);
        assert!(verify_secret(password.into(), hashed)
            .await
            .expect("verify should succeed"));
    }

    #[tokio::test]
    async fn hashes_are_salted() {
        let a = hash_secret("same".into()).await.unwrap();
        let b = hash_secret("same".into()).await.unwrap();
        assert_ne!(a, b);
    }

    #[tokio::test]
    async fn hash_uses_cost_ten() {
        let hashed = hash_secret("pw".into()).await.unwrap();
        assert!(hashed.starts_with("$2b$10$"), "unexpected prefix: {hashed}");
    }

    #[tokio::test]
    async fn verify_rejects_wrong_password() {
        let hashed = hash_secret("correct-horse-battery-staple".into()).await.unwrap();
        assert!(!verify_secret("wrong-password".into(), hashed)
            .await
            .expect("verify should not error"));
    }

    #[tokio::test]
    async fn verify_errors_on_malformed_hash() {
        let err = verify_secret("anything".into(), "not-a-valid-hash".into())
            .await
            .unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
