//! Initialize instruction handler.
//!
//! Creates the program state singleton. The payer becomes the permanent
//! admin.

use anchor_lang::prelude::*;

use crate::constants::*;
use crate::events::ProgramInitialized;
use crate::state::ProgramState;

/// Accounts required for program initialization.
#[derive(Accounts)]
pub struct Initialize<'info> {
    /// Pays for the singleton and becomes admin.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The program state singleton.
    /// `init_if_needed` so a repeated call reaches the handler and fails
    /// with `AlreadyInitialized` instead of a system program error.
    #[account(
        init_if_needed,
        payer = payer,
        space = ProgramState::LEN,
        seeds = [PROGRAM_STATE_SEED],
        bump
    )]
    pub program_state: Account<'info, ProgramState>,

    /// System program for account creation.
    pub system_program: Program<'info, System>,
}

/// Initialize the program state.
///
/// # Errors
/// `AlreadyInitialized` if the singleton already has an admin.
pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    let admin = ctx.accounts.payer.key();
    let program_state = &mut ctx.accounts.program_state;
    program_state.initialize(admin, ctx.bumps.program_state)?;

    msg!("Program initialized with admin: {}", admin);

    emit!(ProgramInitialized {
        admin,
        timestamp: Clock::get()?.unix_timestamp,
    });

    Ok(())
}
