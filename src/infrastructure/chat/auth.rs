use super::client::Transport;
use super::{ChatError, Credentials};
use tracing::debug;

/// How a [`super::ChatClient`] authenticates its requests.
#[derive(Debug)]
pub enum ChatAuth {
    Token(Credentials),
    Login(LoginAuth),
}

impl ChatAuth {
    pub fn token(user_id: impl Into<String>, auth_token: impl Into<String>) -> Self {
        ChatAuth::Token(Credentials {
            user_id: user_id.into(),
            auth_token: auth_token.into(),
        })
    }

    pub fn login(username: impl Into<String>, password: impl Into<String>) -> Self {
        ChatAuth::Login(LoginAuth {
            username: username.into(),
            password: password.into(),
            session: None,
        })
    }

    pub(super) async fn credentials(
        &mut self,
        transport: &Transport,
    ) -> Result<&Credentials, ChatError> {
        match self {
            ChatAuth::Token(credentials) => Ok(&*credentials),
            ChatAuth::Login(login) => login.credentials(transport).await,
        }
    }
}

/// Username/password credentials plus the token obtained from them.
pub struct LoginAuth {
    username: String,
    password: String,
    session: Option<Credentials>,
}

impl LoginAuth {
    async fn credentials(&mut self, transport: &Transport) -> Result<&Credentials, ChatError> {
        let session = match self.session.take() {
            Some(session) => session,
            None => {
                debug!("logging in to chat server as {}", self.username);
                transport.login(&self.username, &self.password).await?.data
            }
        };
        Ok(&*self.session.insert(session))
    }
}

impl std::fmt::Debug for LoginAuth {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginAuth")
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("logged_in", &self.session.is_some())
            .finish()
    }
}
