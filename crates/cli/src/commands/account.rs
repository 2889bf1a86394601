//! Mock account commands.

use clap::Subcommand;
use glassshop_storefront::auth::{
    LoginForm, PasswordChange, ProfileUpdate, RegisterForm, suggest_cities,
};

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum AccountAction {
    /// Sign in
    Login {
        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,
    },
    /// Create an account and sign in
    Register {
        #[arg(short, long)]
        name: String,

        #[arg(short, long)]
        email: String,

        #[arg(short, long)]
        password: String,

        /// Repeat the password
        #[arg(short, long)]
        confirm: String,
    },
    /// Sign out
    Logout,
    /// Show the signed-in user
    Show,
    /// Edit the profile
    Update {
        #[arg(short, long)]
        name: Option<String>,

        /// Empty string clears the city
        #[arg(short, long)]
        city: Option<String>,
    },
    /// Suggest cities for the profile form
    Cities {
        #[arg(default_value = "")]
        query: String,
    },
    /// Check a new password
    Password {
        #[arg(short, long)]
        new: String,

        #[arg(short, long)]
        confirm: String,
    },
}

impl AccountAction {
    pub const fn mutates(&self) -> bool {
        matches!(
            self,
            Self::Login { .. } | Self::Register { .. } | Self::Logout | Self::Update { .. }
        )
    }
}

pub fn run(action: AccountAction, ctx: &mut Context) -> Result<(), CliError> {
    match action {
        AccountAction::Login { email, password } => {
            let user = ctx.store.sign_in(&LoginForm { email, password })?;
            ctx.out.user(Some(user))?;
        }
        AccountAction::Register {
            name,
            email,
            password,
            confirm,
        } => {
            let user = ctx.store.register(&RegisterForm {
                name,
                email,
                password,
                confirm_password: confirm,
            })?;
            ctx.out.user(Some(user))?;
        }
        AccountAction::Logout => {
            ctx.store.sign_out();
            ctx.out.user(None)?;
        }
        AccountAction::Show => ctx.out.user(ctx.store.user())?,
        AccountAction::Update { name, city } => {
            let user = ctx.store.update_profile(&ProfileUpdate { name, city })?;
            ctx.out.user(Some(user))?;
        }
        AccountAction::Cities { query } => ctx.out.list(&suggest_cities(&query))?,
        AccountAction::Password { new, confirm } => {
            PasswordChange {
                new_password: new,
                confirm_password: confirm,
            }
            .validate()?;
            ctx.out.message("Password is valid")?;
        }
    }
    Ok(())
}
