//! Promo code commands.

use clap::Subcommand;
use glassshop_storefront::AppError;

use super::{CliError, Context};

#[derive(Subcommand)]
pub enum PromoAction {
    /// Redeem a promo code
    Apply { code: String },
    /// Drop the applied code; it stays used
    Clear,
    /// Show promo status
    Status,
}

impl PromoAction {
    pub const fn mutates(&self) -> bool {
        !matches!(self, Self::Status)
    }
}

pub fn run(action: PromoAction, ctx: &mut Context) -> Result<(), CliError> {
    match action {
        PromoAction::Apply { code } => {
            let already_used = ctx.store.promo_code_used();
            if !ctx.store.apply_promo_code(&code) {
                let reason = if already_used {
                    "promo code has already been used"
                } else {
                    "unknown promo code"
                };
                return Err(AppError::BadRequest(reason.to_string()).into());
            }
            let summary = ctx.store.cart_summary(&ctx.catalog);
            ctx.out.cart(&summary, ctx.store.applied_promo_code())?;
        }
        PromoAction::Clear => {
            ctx.store.clear_promo_code();
            ctx.out.promo(ctx.store.promo())?;
        }
        PromoAction::Status => ctx.out.promo(ctx.store.promo())?,
    }
    Ok(())
}
