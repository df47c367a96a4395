// Vault Accessor
//
// CPI helpers over the two custodial balances backing a pool's recorded
// reserves: the system-owned SOL vault PDA and the SPL token vault owned by
// the pool-authority PDA. Each helper is called only inside the instruction
// that updates the matching reserve counter, so record and custody move in
// the same atomic unit.

use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer as SolTransfer};
use anchor_spl::token::{self, Burn, MintTo, Transfer};

/// Which custodial balance an operation targets.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, PartialEq, Eq, Debug)]
pub enum VaultKind {
    Sol,
    Token,
}

// Move lamports into the SOL vault. The payer signs the transaction.
pub fn deposit_sol<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    from: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
) -> Result<()> {
    system_program::transfer(
        CpiContext::new(
            system_program.clone(),
            SolTransfer {
                from: from.clone(),
                to: vault.clone(),
            },
        ),
        amount,
    )
}

// Move lamports out of the SOL vault (requires the vault PDA as signer).
pub fn payout_sol<'info>(
    amount: u64,
    system_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    vault_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[vault_seeds];

    system_program::transfer(
        CpiContext::new_with_signer(
            system_program.clone(),
            SolTransfer {
                from: vault.clone(),
                to: to.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Mint purchased tokens into curve custody (pool-authority PDA signs as the
// mint authority).
pub fn mint_into_custody<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    token::mint_to(
        CpiContext::new_with_signer(
            token_program.clone(),
            MintTo {
                mint: mint.clone(),
                to: vault.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Burn sold tokens out of curve custody.
pub fn burn_from_custody<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    mint: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    token::burn(
        CpiContext::new_with_signer(
            token_program.clone(),
            Burn {
                mint: mint.clone(),
                from: vault.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}

// Transfer custodied tokens out of the vault without burning them. Used by
// authority withdrawal.
pub fn transfer_from_custody<'info>(
    amount: u64,
    token_program: &AccountInfo<'info>,
    vault: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    authority: &AccountInfo<'info>,
    authority_seeds: &[&[u8]],
) -> Result<()> {
    let signer_seeds = &[authority_seeds];

    token::transfer(
        CpiContext::new_with_signer(
            token_program.clone(),
            Transfer {
                from: vault.clone(),
                to: to.clone(),
                authority: authority.clone(),
            },
            signer_seeds,
        ),
        amount,
    )
}
