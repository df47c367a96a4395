#![cfg(feature = "test-sbf")]
// Test utilities for the launch pool program

use litesvm::LiteSVM;
use litesvm_token::CreateMint;
use solana_sdk::{
    hash::hash,
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use spl_associated_token_account::get_associated_token_address;

use anchor_lang::AccountDeserialize;

// Program ID matching declare_id! (launch_pool)
pub const LAUNCH_POOL_PROGRAM_ID: Pubkey = Pubkey::new_from_array(launch_pool::ID.to_bytes());

// Standard program IDs
pub const TOKEN_PROGRAM_ID: Pubkey = spl_token::ID;
pub const ASSOCIATED_TOKEN_PROGRAM_ID: Pubkey = spl_associated_token_account::ID;
use solana_system_interface::program::ID as system_program;

// PDA Seeds
pub const POOL_SEED: &[u8] = b"pool";
pub const POOL_AUTHORITY_SEED: &[u8] = b"pool_authority";
pub const SOL_VAULT_SEED: &[u8] = b"sol_vault";
pub const CONFIG_SEED: &[u8] = b"config";

// Token decimals
pub const DECIMALS: u8 = 6;

// Build Anchor instruction discriminator
// Formula: first 8 bytes of sha256("global:method_name")
pub fn anchor_discriminator(method: &str) -> [u8; 8] {
    let preimage = format!("global:{}", method);
    let hash_result = hash(preimage.as_bytes());
    let mut discriminator = [0u8; 8];
    discriminator.copy_from_slice(&hash_result.to_bytes()[..8]);
    discriminator
}

// Setup LiteSVM with the launch pool program
pub fn setup_svm() -> LiteSVM {
    let mut svm = LiteSVM::new();
    let program_bytes = include_bytes!("../../../target/deploy/launch_pool.so");
    let _ = svm.add_program(LAUNCH_POOL_PROGRAM_ID, program_bytes);
    svm
}

// Create and fund account
pub fn create_funded_account(svm: &mut LiteSVM, lamports: u64) -> Keypair {
    let keypair = Keypair::new();
    svm.airdrop(&keypair.pubkey(), lamports)
        .expect("Airdrop should succeed");
    keypair
}

// Derive pool PDA
pub fn derive_pool_pda(mint: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[POOL_SEED, mint.as_ref()], &LAUNCH_POOL_PROGRAM_ID)
}

// Derive pool authority PDA
pub fn derive_pool_authority_pda(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(
        &[POOL_AUTHORITY_SEED, pool.as_ref()],
        &LAUNCH_POOL_PROGRAM_ID,
    )
}

// Derive SOL vault PDA
pub fn derive_sol_vault_pda(pool: &Pubkey) -> (Pubkey, u8) {
    Pubkey::find_program_address(&[SOL_VAULT_SEED, pool.as_ref()], &LAUNCH_POOL_PROGRAM_ID)
}

// Derive config PDA
pub fn derive_config_pda() -> (Pubkey, u8) {
    Pubkey::find_program_address(&[CONFIG_SEED], &LAUNCH_POOL_PROGRAM_ID)
}

// Create a mint whose mint authority ends up with the pool authority PDA,
// so the program can mint purchased tokens into custody. The PDA depends on
// the mint address, so the mint is created first and its authority handed
// over afterwards.
pub fn create_pool_mint(svm: &mut LiteSVM, payer: &Keypair) -> Pubkey {
    let mint = CreateMint::new(svm, payer)
        .authority(&payer.pubkey())
        .decimals(DECIMALS)
        .send()
        .expect("Failed to create mint");

    let (pool, _) = derive_pool_pda(&mint);
    let (pool_authority, _) = derive_pool_authority_pda(&pool);

    let set_authority_ix = spl_token::instruction::set_authority(
        &TOKEN_PROGRAM_ID,
        &mint,
        Some(&pool_authority),
        spl_token::instruction::AuthorityType::MintTokens,
        &payer.pubkey(),
        &[],
    )
    .expect("Failed to build set_authority");

    let tx = Transaction::new_signed_with_payer(
        &[set_authority_ix],
        Some(&payer.pubkey()),
        &[payer],
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .expect("Failed to hand mint authority to the pool authority PDA");

    mint
}

// Fetch and deserialize the pool account
pub fn fetch_pool(svm: &LiteSVM, mint: &Pubkey) -> launch_pool::state::Pool {
    let (pool, _) = derive_pool_pda(mint);
    let account = svm.get_account(&pool).expect("Pool account should exist");
    launch_pool::state::Pool::try_deserialize(&mut account.data.as_slice())
        .expect("Pool account should deserialize")
}

// Lamports sitting in the SOL vault above its rent-exempt floor
pub fn sol_vault_custody(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let (pool, _) = derive_pool_pda(mint);
    let (vault_sol, _) = derive_sol_vault_pda(&pool);
    let rent_floor = svm.minimum_balance_for_rent_exemption(0);
    let balance = svm
        .get_account(&vault_sol)
        .map(|account| account.lamports)
        .unwrap_or(0);
    balance.saturating_sub(rent_floor)
}

// Tokens sitting in the token vault
pub fn token_vault_custody(svm: &LiteSVM, mint: &Pubkey) -> u64 {
    let (pool, _) = derive_pool_pda(mint);
    let (pool_authority, _) = derive_pool_authority_pda(&pool);
    let vault_token = get_associated_token_address(&pool_authority, mint);
    let vault: spl_token::state::Account =
        litesvm_token::get_spl_account(svm, &vault_token).expect("Token vault should exist");
    vault.amount
}

// Build init_config instruction
pub fn build_init_config_ix(admin: &Pubkey, graduation_threshold: u64) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("init_config").to_vec();
    data.extend_from_slice(&graduation_threshold.to_le_bytes());

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*admin, true),
            AccountMeta::new(config, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Build update_config instruction
pub fn build_update_config_ix(admin: &Pubkey, graduation_threshold: u64) -> Instruction {
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("update_config").to_vec();
    data.extend_from_slice(&graduation_threshold.to_le_bytes());

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*admin, true),
            AccountMeta::new(config, false),
        ],
        data,
    }
}

// Build init_pool instruction
pub fn build_init_pool_ix(
    payer: &Pubkey,
    authority: &Pubkey,
    mint: &Pubkey,
    curve_type: u8,
) -> Instruction {
    let (pool, _) = derive_pool_pda(mint);
    let (pool_authority, _) = derive_pool_authority_pda(&pool);
    let (vault_sol, _) = derive_sol_vault_pda(&pool);
    let vault_token = get_associated_token_address(&pool_authority, mint);

    let mut data = anchor_discriminator("init_pool").to_vec();
    data.push(curve_type);

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(pool, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new(vault_sol, false),
            AccountMeta::new(vault_token, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Shared account list for buy and sell
fn trade_accounts(trader: &Pubkey, mint: &Pubkey) -> Vec<AccountMeta> {
    let (pool, _) = derive_pool_pda(mint);
    let (pool_authority, _) = derive_pool_authority_pda(&pool);
    let (vault_sol, _) = derive_sol_vault_pda(&pool);
    let vault_token = get_associated_token_address(&pool_authority, mint);

    vec![
        AccountMeta::new(*trader, true),
        AccountMeta::new(pool, false),
        AccountMeta::new_readonly(pool_authority, false),
        AccountMeta::new(*mint, false),
        AccountMeta::new(vault_sol, false),
        AccountMeta::new(vault_token, false),
        AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
        AccountMeta::new_readonly(system_program, false),
    ]
}

// Build buy instruction
pub fn build_buy_ix(
    buyer: &Pubkey,
    mint: &Pubkey,
    token_amount: u64,
    max_sol_cost: u64,
) -> Instruction {
    let mut data = anchor_discriminator("buy").to_vec();
    data.extend_from_slice(&token_amount.to_le_bytes());
    data.extend_from_slice(&max_sol_cost.to_le_bytes());

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: trade_accounts(buyer, mint),
        data,
    }
}

// Build sell instruction
pub fn build_sell_ix(
    seller: &Pubkey,
    mint: &Pubkey,
    token_amount: u64,
    min_sol_out: u64,
) -> Instruction {
    let mut data = anchor_discriminator("sell").to_vec();
    data.extend_from_slice(&token_amount.to_le_bytes());
    data.extend_from_slice(&min_sol_out.to_le_bytes());

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: trade_accounts(seller, mint),
        data,
    }
}

// Build lock_liquidity instruction
pub fn build_lock_liquidity_ix(authority: &Pubkey, mint: &Pubkey, locked: bool) -> Instruction {
    let (pool, _) = derive_pool_pda(mint);

    let mut data = anchor_discriminator("lock_liquidity").to_vec();
    data.push(locked as u8);

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new(pool, false),
        ],
        data,
    }
}

// Build graduate instruction
pub fn build_graduate_ix(authority: &Pubkey, mint: &Pubkey, dex: u8) -> Instruction {
    let (pool, _) = derive_pool_pda(mint);
    let (config, _) = derive_config_pda();

    let mut data = anchor_discriminator("graduate").to_vec();
    data.push(dex);

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new_readonly(*authority, true),
            AccountMeta::new_readonly(config, false),
            AccountMeta::new(pool, false),
        ],
        data,
    }
}

// Build withdraw instruction
// side: 0 = SOL vault, 1 = token vault
pub fn build_withdraw_ix(authority: &Pubkey, mint: &Pubkey, side: u8, amount: u64) -> Instruction {
    let (pool, _) = derive_pool_pda(mint);
    let (pool_authority, _) = derive_pool_authority_pda(&pool);
    let (vault_sol, _) = derive_sol_vault_pda(&pool);
    let vault_token = get_associated_token_address(&pool_authority, mint);
    let authority_token = get_associated_token_address(authority, mint);

    let mut data = anchor_discriminator("withdraw").to_vec();
    data.push(side);
    data.extend_from_slice(&amount.to_le_bytes());

    Instruction {
        program_id: LAUNCH_POOL_PROGRAM_ID,
        accounts: vec![
            AccountMeta::new(*authority, true),
            AccountMeta::new(pool, false),
            AccountMeta::new_readonly(pool_authority, false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new(vault_sol, false),
            AccountMeta::new(vault_token, false),
            AccountMeta::new(authority_token, false),
            AccountMeta::new_readonly(TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(ASSOCIATED_TOKEN_PROGRAM_ID, false),
            AccountMeta::new_readonly(system_program, false),
        ],
        data,
    }
}

// Sign and send a single-instruction transaction
pub fn send_ix(
    svm: &mut LiteSVM,
    ix: Instruction,
    payer: &Keypair,
    signers: &[&Keypair],
) -> Result<(), String> {
    let tx = Transaction::new_signed_with_payer(
        &[ix],
        Some(&payer.pubkey()),
        signers,
        svm.latest_blockhash(),
    );
    svm.send_transaction(tx)
        .map(|_| ())
        .map_err(|failed| format!("{:?} | logs: {}", failed.err, failed.meta.logs.join("\n")))
}
