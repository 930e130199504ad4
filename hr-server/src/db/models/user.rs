//! User account model
//!
//! 登录账户，密码使用 Argon2 哈希存储。

use argon2::password_hash::{PasswordHash, PasswordHasher, PasswordVerifier, SaltString, rand_core::OsRng};
use argon2::Argon2;
use serde::{Deserialize, Serialize};
use shared::{Role, UserInfo};
use surrealdb::RecordId;

use super::serde_helpers;

pub type UserId = RecordId;

/// 用户档案 (数据库记录)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserProfile {
    #[serde(
        default,
        with = "serde_helpers::option_record_id",
        skip_serializing_if = "Option::is_none"
    )]
    pub id: Option<UserId>,
    /// 登录名
    pub username: String,
    /// 姓名
    pub full_name: String,
    /// Argon2 密码哈希 (绝不序列化到响应)
    #[serde(skip_serializing)]
    pub hash_pass: String,
    /// 角色
    pub role: Role,
    /// 部门
    pub department: String,
}

impl UserProfile {
    /// Hash a plaintext password with Argon2
    pub fn hash_password(password: &str) -> Result<String, argon2::password_hash::Error> {
        let salt = SaltString::generate(&mut OsRng);
        let argon2 = Argon2::default();
        let hash = argon2.hash_password(password.as_bytes(), &salt)?;
        Ok(hash.to_string())
    }

    /// Verify a plaintext password against the stored hash
    pub fn verify_password(&self, password: &str) -> bool {
        match PasswordHash::new(&self.hash_pass) {
            Ok(parsed) => Argon2::default()
                .verify_password(password.as_bytes(), &parsed)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Public view of the account, safe to return to clients
    pub fn to_user_info(&self) -> UserInfo {
        UserInfo {
            id: self.id.as_ref().map(|id| id.to_string()).unwrap_or_default(),
            username: self.username.clone(),
            full_name: self.full_name.clone(),
            role: self.role,
            department: self.department.clone(),
        }
    }
}

/// 创建用户的数据 (种子数据使用)
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserCreate {
    pub username: String,
    pub password: String,
    pub full_name: String,
    pub role: Role,
    pub department: String,
}
