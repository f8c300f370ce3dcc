// src/infrastructure/security/token.rs
use crate::application::{
    dto::{AuthTokenDto, AuthenticatedUser, TokenSubject},
    error::{ApplicationError, ApplicationResult},
    ports::security::TokenManager,
};
use crate::infrastructure::security::claims::{UserClaim, WindowClaim, parse_claims};
use async_trait::async_trait;
use biscuit_auth::{
    Biscuit, KeyPair, PrivateKey, PublicKey,
    builder::{Algorithm, AuthorizerBuilder, Term},
};
use chrono::{DateTime, Utc};
use std::{
    collections::HashMap,
    sync::Arc,
    time::{Duration, SystemTime},
};

const SESSION_CODE: &str = r"
    user({uid}, {uname}, {uemail});
    session_window({issued_secs}, {exp_secs});
    check if time($now), $now >= {issued};
    check if time($now), $now <= {exp};
";

/// Session tokens are sealed Biscuits signed with an Ed25519 root key. The
/// expiry is a datalog check, so an expired token fails authorization itself.
#[derive(Clone)]
pub struct BiscuitTokenManager {
    root: Arc<KeyPair>,
    public: PublicKey,
    ttl: Duration,
}

impl BiscuitTokenManager {
    pub fn new(private_key_hex: &str, ttl: Duration) -> ApplicationResult<Self> {
        let private = PrivateKey::from_bytes_hex(private_key_hex, Algorithm::Ed25519)
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;
        let keypair = KeyPair::from(&private);
        let public = keypair.public();

        Ok(Self {
            root: Arc::new(keypair),
            public,
            ttl,
        })
    }
}

fn unix_seconds(at: SystemTime) -> i64 {
    DateTime::<Utc>::from(at).timestamp()
}

fn session_params(
    subject: &TokenSubject,
    issued_at: SystemTime,
    expires_at: SystemTime,
) -> HashMap<String, Term> {
    let mut params: HashMap<String, Term> = HashMap::new();
    params.insert("uid".to_string(), i64::from(subject.user_id).into());
    params.insert("uname".to_string(), subject.name.clone().into());
    params.insert("uemail".to_string(), subject.email.clone().into());
    params.insert("issued_secs".to_string(), unix_seconds(issued_at).into());
    params.insert("exp_secs".to_string(), unix_seconds(expires_at).into());
    params.insert("issued".to_string(), issued_at.into());
    params.insert("exp".to_string(), expires_at.into());
    params
}

fn build_and_serialize_biscuit(
    params: HashMap<String, Term>,
    root: &KeyPair,
) -> ApplicationResult<String> {
    let token = Biscuit::builder()
        .code_with_params(SESSION_CODE, params, HashMap::new())
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .build(root)
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?;

    token
        .seal()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
        .to_base64()
        .map_err(|err| ApplicationError::infrastructure(err.to_string()))
}

#[async_trait]
impl TokenManager for BiscuitTokenManager {
    async fn issue(&self, subject: TokenSubject) -> ApplicationResult<AuthTokenDto> {
        let issued_at = SystemTime::now();
        let expires_at = issued_at
            .checked_add(self.ttl)
            .ok_or_else(|| ApplicationError::infrastructure("token expiration overflow"))?;

        let params = session_params(&subject, issued_at, expires_at);
        let token = build_and_serialize_biscuit(params, self.root.as_ref())?;

        Ok(AuthTokenDto {
            token,
            issued_at: DateTime::<Utc>::from(issued_at),
            expires_at: DateTime::<Utc>::from(expires_at),
            expires_in: i64::try_from(self.ttl.as_secs()).unwrap_or(i64::MAX),
        })
    }

    async fn authenticate(&self, token: &str) -> ApplicationResult<AuthenticatedUser> {
        let biscuit = Biscuit::from_base64(token, self.public)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let mut authorizer = AuthorizerBuilder::new()
            .code("allow if true")
            .map_err(|err| ApplicationError::infrastructure(err.to_string()))?
            .time()
            .build(&biscuit)
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        authorizer
            .authorize()
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        let users: Vec<UserClaim> = authorizer
            .query("data($id, $name, $email) <- user($id, $name, $email)")
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;
        let windows: Vec<WindowClaim> = authorizer
            .query("data($issued, $exp) <- session_window($issued, $exp)")
            .map_err(|err| ApplicationError::unauthorized(err.to_string()))?;

        parse_claims(users, windows)
    }
}
