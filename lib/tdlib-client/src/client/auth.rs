// Copyright 2020 - developers of the `grammers` project.
//
// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// https://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or https://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

use std::fmt;

use tdlib_types::{enums, functions, types};

use super::Client;
use crate::InvocationError;

/// The error type which is returned when signing in fails.
#[derive(Debug)]
#[allow(clippy::large_enum_variant)]
pub enum SignInError {
    /// The phone number is not registered yet, and the terms of service
    /// must be accepted with [`functions::RegisterUser`] before continuing.
    SignUpRequired(types::TermsOfService),
    /// The account has 2FA enabled, and the password is required.
    PasswordRequired(PasswordToken),
    /// The code used to complete login was not valid.
    InvalidCode,
    /// The 2FA password used to complete login was not valid.
    InvalidPassword(PasswordToken),
    /// A generic invocation error occured.
    Other(InvocationError),
}

impl fmt::Display for SignInError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use SignInError::*;
        match self {
            SignUpRequired(_terms) => write!(f, "sign in error: sign up required"),
            PasswordRequired(_password) => write!(f, "2fa password required"),
            InvalidCode => write!(f, "sign in error: invalid code"),
            InvalidPassword(_password) => write!(f, "invalid password"),
            Other(e) => write!(f, "sign in error: {e}"),
        }
    }
}

impl std::error::Error for SignInError {}

impl From<InvocationError> for SignInError {
    fn from(error: InvocationError) -> Self {
        Self::Other(error)
    }
}

/// Password information needed to complete the login with [`Client::check_password`].
#[derive(Clone, Debug)]
pub struct PasswordToken {
    hint: String,
    has_recovery_email_address: bool,
}

impl PasswordToken {
    fn new(state: types::AuthorizationStateWaitPassword) -> Self {
        Self {
            hint: state.password_hint,
            has_recovery_email_address: state.has_recovery_email_address,
        }
    }

    /// The hint the user chose for their password, if any.
    pub fn hint(&self) -> Option<&str> {
        if self.hint.is_empty() {
            None
        } else {
            Some(&self.hint)
        }
    }

    /// Whether the account can recover its password through email.
    pub fn has_recovery_email_address(&self) -> bool {
        self.has_recovery_email_address
    }
}

/// Method implementations related with the authentication of the user into the API.
impl Client {
    /// Returns the current authorization state of TDLib.
    ///
    /// The same states are also delivered as updates, which is the preferred way
    /// of following the authorization flow.
    pub async fn authorization_state(&self) -> Result<enums::AuthorizationState, InvocationError> {
        self.invoke(&functions::GetAuthorizationState {}).await
    }

    /// Returns `true` if the current account is authorized. Otherwise,
    /// logging in will be required before being able to invoke requests.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdlib_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// if client.is_authorized().await? {
    ///     println!("Client already authorized and ready to use!");
    /// } else {
    ///     println!("Client is not authorized, you will need to sign_in!");
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn is_authorized(&self) -> Result<bool, InvocationError> {
        Ok(matches!(
            self.authorization_state().await?,
            enums::AuthorizationState::Ready
        ))
    }

    /// Provides the parameters TDLib needs before anything else can be done.
    ///
    /// This must be done once TDLib reports [`enums::AuthorizationState::WaitTdlibParameters`].
    pub async fn set_tdlib_parameters(
        &self,
        parameters: functions::SetTdlibParameters,
    ) -> Result<(), InvocationError> {
        self.invoke(&parameters).await.map(drop)
    }

    /// Returns the current authorized user.
    pub async fn get_me(&self) -> Result<types::User, InvocationError> {
        self.invoke(&functions::GetMe {}).await.map(Into::into)
    }

    /// Signs in to the bot account associated with this token.
    ///
    /// This is the method you need to call to use the client under a bot account.
    ///
    /// # Examples
    ///
    /// ```
    /// # async fn f(client: tdlib_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// // Note: this value is obviously fake.
    /// //       Obtain your own by talking to @BotFather via a Telegram app.
    /// const TOKEN: &str = "776609994:AAFXAy5-PawQlnYywUlZ_b_GOXgarR3ah_yq";
    ///
    /// let user = client.bot_sign_in(TOKEN).await?;
    /// println!("Signed in as {}!", user.first_name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn bot_sign_in(&self, token: &str) -> Result<types::User, InvocationError> {
        self.invoke(&functions::CheckAuthenticationBotToken {
            token: token.to_string(),
        })
        .await?;
        self.get_me().await
    }

    /// Requests the login code for the account associated to the given phone
    /// number via another Telegram application or SMS.
    ///
    /// After you obtain the code, you will need to [`Client::sign_in`] to complete the process.
    pub async fn request_login_code(&self, phone: &str) -> Result<(), InvocationError> {
        self.invoke(&functions::SetAuthenticationPhoneNumber {
            phone_number: phone.to_string(),
            settings: None,
        })
        .await
        .map(drop)
    }

    /// Signs in to the user account.
    ///
    /// You must call [`Client::request_login_code`] before using this method in order to
    /// have TDLib send the login code.
    ///
    /// # Examples
    ///
    /// ```
    /// use tdlib_client::SignInError;
    ///
    /// # async fn f(client: tdlib_client::Client) -> Result<(), Box<dyn std::error::Error>> {
    /// # let code = "";
    /// let user = match client.sign_in(code).await {
    ///     Ok(user) => user,
    ///     Err(SignInError::PasswordRequired(token)) => {
    ///         println!("Password hint: {:?}", token.hint());
    ///         client.check_password("hunter2").await?
    ///     }
    ///     Err(err) => return Err(err.into()),
    /// };
    /// println!("Signed in as {}!", user.first_name);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn sign_in(&self, code: &str) -> Result<types::User, SignInError> {
        match self
            .invoke(&functions::CheckAuthenticationCode {
                code: code.to_string(),
            })
            .await
        {
            Ok(_) => self.complete_login().await,
            Err(err) if err.is("PHONE_CODE_*") => Err(SignInError::InvalidCode),
            Err(err) => Err(SignInError::Other(err)),
        }
    }

    /// Sign in using two-factor authentication (user password).
    ///
    /// This is needed after [`Client::sign_in`] fails with [`SignInError::PasswordRequired`].
    pub async fn check_password(&self, password: &str) -> Result<types::User, SignInError> {
        match self
            .invoke(&functions::CheckAuthenticationPassword {
                password: password.to_string(),
            })
            .await
        {
            Ok(_) => self.complete_login().await,
            Err(err) if err.is("PASSWORD_HASH_INVALID") => {
                match self.authorization_state().await? {
                    enums::AuthorizationState::WaitPassword(state) => {
                        Err(SignInError::InvalidPassword(PasswordToken::new(state)))
                    }
                    _ => Err(SignInError::Other(err)),
                }
            }
            Err(err) => Err(SignInError::Other(err)),
        }
    }

    /// Figures out what is left to do after a code or password was accepted.
    async fn complete_login(&self) -> Result<types::User, SignInError> {
        match self.authorization_state().await? {
            enums::AuthorizationState::WaitPassword(state) => {
                Err(SignInError::PasswordRequired(PasswordToken::new(state)))
            }
            enums::AuthorizationState::WaitRegistration(state) => {
                Err(SignInError::SignUpRequired(state.terms_of_service))
            }
            _ => Ok(self.get_me().await?),
        }
    }

    /// Signs out of the account, destroying all local data.
    ///
    /// TDLib closes afterwards, so a new instance is needed to sign in again.
    pub async fn sign_out(&self) -> Result<(), InvocationError> {
        self.invoke(&functions::LogOut {}).await.map(drop)
    }

    /// Closes TDLib after flushing all databases to disk.
    ///
    /// Once closed, the [`crate::DispatcherRunner`] stops on its own.
    pub async fn close(&self) -> Result<(), InvocationError> {
        self.invoke(&functions::Close {}).await.map(drop)
    }

    /// Signals the [`crate::DispatcherRunner`] shared by all clients to stop.
    ///
    /// Unlike [`Client::close`], TDLib itself is not closed.
    pub fn disconnect(&self) {
        self.0.handle.quit();
    }
}
