//! Account commands: register, login, logout, profile.
//!
//! Form-level validation (password length, confirmation match) lives here,
//! not in the state containers, matching the storefront's split.

use secrecy::SecretString;

use adstore_core::Email;
use adstore_store::models::{ProfileUpdate, RegisterData};

use super::Context;

/// Minimum password length accepted by the registration form.
const MIN_PASSWORD_LENGTH: usize = 6;

/// Create an account and sign it in.
pub async fn register(
    name: &str,
    email: &str,
    password: &str,
    confirm: &str,
    company: Option<String>,
    phone: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    if password != confirm {
        return Err("Пароли не совпадают".into());
    }
    if password.chars().count() < MIN_PASSWORD_LENGTH {
        return Err(format!(
            "Пароль должен содержать минимум {MIN_PASSWORD_LENGTH} символов"
        )
        .into());
    }
    let email = Email::parse(email)?;

    let mut ctx = Context::load()?;
    let user = ctx
        .session
        .register(RegisterData {
            name: name.to_owned(),
            email,
            password: SecretString::from(password.to_owned()),
            company,
            phone,
        })
        .await?;

    println!("Регистрация выполнена: {} <{}>", user.name, user.email);
    Ok(())
}

/// Sign in with email and password.
pub async fn login(email: &str, password: &str) -> Result<(), Box<dyn std::error::Error>> {
    let email = Email::parse(email)?;
    let password = SecretString::from(password.to_owned());

    let mut ctx = Context::load()?;
    let user = ctx.session.login(&email, &password).await?;

    println!("Вход выполнен: {} <{}>", user.name, user.email);
    Ok(())
}

/// Sign out.
pub fn logout() -> Result<(), Box<dyn std::error::Error>> {
    let mut ctx = Context::load()?;
    ctx.session.logout()?;
    println!("Выход выполнен");
    Ok(())
}

/// Print the signed-in user's profile.
pub fn show_profile() -> Result<(), Box<dyn std::error::Error>> {
    let ctx = Context::load()?;
    let Some(user) = ctx.session.current_user() else {
        return Err("Вы не вошли в систему".into());
    };

    println!("{} <{}>", user.name, user.email);
    if let Some(company) = &user.company {
        println!("Компания: {company}");
    }
    if let Some(phone) = &user.phone {
        println!("Телефон: {phone}");
    }
    println!("Зарегистрирован: {}", user.registered_at.format("%Y-%m-%d"));
    Ok(())
}

/// Merge provided fields into the profile.
pub fn update_profile(
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    phone: Option<String>,
) -> Result<(), Box<dyn std::error::Error>> {
    let email = email.as_deref().map(Email::parse).transpose()?;

    let mut ctx = Context::load()?;
    if ctx.session.current_user().is_none() {
        return Err("Вы не вошли в систему".into());
    }
    ctx.session.update_profile(ProfileUpdate {
        name,
        email,
        company,
        phone,
    })?;

    println!("Профиль обновлен");
    Ok(())
}
