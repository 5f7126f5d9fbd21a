//! Runtime checks that only hold at the instruction boundary: the pool gate
//! on privileged entry points, rejection of unrecognized instructions, and
//! the duplicate-account hazard when a transfer names its sender as the
//! recipient.

use anchor_lang::{AccountDeserialize, InstructionData, ToAccountMetas};
use anchor_spl::{associated_token, token::spl_token};
use solana_program_test::{processor, tokio, BanksClient, BanksClientError, ProgramTest};
use solana_sdk::{
    instruction::{Instruction, InstructionError},
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    system_instruction, system_program,
    transaction::{Transaction, TransactionError},
};
use yield_token::{
    HolderAccount, InitializeReserveArgs, Reserve, YieldTokenError, HOLDER_SEED, RAY, RESERVE_SEED,
};

struct Env {
    banks: BanksClient,
    payer: Keypair,
    pool: Keypair,
    mint: Pubkey,
    reserve: Pubkey,
}

async fn send(
    banks: &mut BanksClient,
    payer: &Keypair,
    extra_signers: &[&Keypair],
    ixs: &[Instruction],
) -> Result<(), BanksClientError> {
    let blockhash = banks.get_latest_blockhash().await.expect("blockhash");
    let mut signers: Vec<&Keypair> = vec![payer];
    signers.extend_from_slice(extra_signers);
    let tx = Transaction::new_signed_with_payer(ixs, Some(&payer.pubkey()), &signers, blockhash);
    banks.process_transaction(tx).await
}

fn custom_code(err: BanksClientError) -> u32 {
    let tx_err = match err {
        BanksClientError::TransactionError(e) => e,
        BanksClientError::SimulationError { err, .. } => err,
        other => panic!("unexpected banks error: {other:?}"),
    };
    match tx_err {
        TransactionError::InstructionError(_, InstructionError::Custom(code)) => code,
        other => panic!("unexpected transaction error: {other:?}"),
    }
}

fn holder_pda(reserve: &Pubkey, owner: &Pubkey) -> Pubkey {
    Pubkey::find_program_address(
        &[HOLDER_SEED, reserve.as_ref(), owner.as_ref()],
        &yield_token::id(),
    )
    .0
}

fn mint_ix(reserve: Pubkey, pool: Pubkey, holder: Pubkey, amount: u64, index: u128) -> Instruction {
    Instruction {
        program_id: yield_token::id(),
        accounts: yield_token::accounts::MintYieldToken {
            pool,
            reserve,
            holder,
            holder_account: holder_pda(&reserve, &holder),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: yield_token::instruction::Mint { amount, index }.data(),
    }
}

async fn fund(banks: &mut BanksClient, payer: &Keypair, to: &Pubkey) {
    let ix = system_instruction::transfer(&payer.pubkey(), to, 1_000_000_000);
    send(banks, payer, &[], &[ix]).await.expect("fund");
}

async fn read_reserve(banks: &mut BanksClient, address: Pubkey) -> Reserve {
    let account = banks
        .get_account(address)
        .await
        .expect("banks")
        .expect("reserve account");
    Reserve::try_deserialize(&mut account.data.as_slice()).expect("reserve data")
}

async fn read_holder(banks: &mut BanksClient, address: Pubkey) -> HolderAccount {
    let account = banks
        .get_account(address)
        .await
        .expect("banks")
        .expect("holder account");
    HolderAccount::try_deserialize(&mut account.data.as_slice()).expect("holder data")
}

async fn setup() -> Env {
    let program = ProgramTest::new(
        "yield_token",
        yield_token::id(),
        processor!(|program_id, accounts, data| {
            yield_token::entry(program_id, unsafe { core::mem::transmute(accounts) }, data)
        }),
    );
    let (mut banks, payer, _) = program.start().await;

    let pool = Keypair::new();
    let underlying_mint = Keypair::new();
    fund(&mut banks, &payer, &pool.pubkey()).await;

    let rent = banks.get_rent().await.expect("rent");
    let mint_space = spl_token::state::Mint::LEN;
    let mint_ixs = [
        system_instruction::create_account(
            &payer.pubkey(),
            &underlying_mint.pubkey(),
            rent.minimum_balance(mint_space),
            mint_space as u64,
            &spl_token::id(),
        ),
        spl_token::instruction::initialize_mint2(
            &spl_token::id(),
            &underlying_mint.pubkey(),
            &payer.pubkey(),
            None,
            6,
        )
        .expect("initialize_mint2"),
    ];
    send(&mut banks, &payer, &[&underlying_mint], &mint_ixs)
        .await
        .expect("underlying mint");

    let (init_ix, reserve) =
        initialize_reserve_ix(&payer.pubkey(), &underlying_mint.pubkey(), &pool.pubkey());
    send(&mut banks, &payer, &[], &[init_ix])
        .await
        .expect("initialize_reserve");

    Env {
        banks,
        payer,
        pool,
        mint: underlying_mint.pubkey(),
        reserve,
    }
}

fn initialize_reserve_ix(payer: &Pubkey, mint: &Pubkey, pool: &Pubkey) -> (Instruction, Pubkey) {
    let (reserve, _) = Pubkey::find_program_address(
        &[RESERVE_SEED, mint.as_ref(), pool.as_ref()],
        &yield_token::id(),
    );
    let vault = associated_token::get_associated_token_address(&reserve, mint);
    let ix = Instruction {
        program_id: yield_token::id(),
        accounts: yield_token::accounts::InitializeReserve {
            payer: *payer,
            reserve,
            underlying_mint: *mint,
            vault,
            token_program: spl_token::id(),
            associated_token_program: associated_token::ID,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: yield_token::instruction::InitializeReserve {
            args: InitializeReserveArgs {
                name: "Yield USD".to_string(),
                symbol: "yUSD".to_string(),
                pool: *pool,
                treasury: Pubkey::new_unique(),
            },
        }
        .data(),
    };
    (ix, reserve)
}

#[tokio::test]
async fn non_pool_signer_cannot_mint() {
    let mut env = setup().await;
    let intruder = Keypair::new();
    fund(&mut env.banks, &env.payer, &intruder.pubkey()).await;

    let holder = Pubkey::new_unique();
    let ix = mint_ix(env.reserve, intruder.pubkey(), holder, 100, RAY);
    let err = send(&mut env.banks, &env.payer, &[&intruder], &[ix])
        .await
        .expect_err("a non-pool signer must not mint");
    assert_eq!(custom_code(err), u32::from(YieldTokenError::Unauthorized));

    let reserve = read_reserve(&mut env.banks, env.reserve).await;
    assert_eq!(reserve.total_scaled_supply, 0);
    let holder_account = env
        .banks
        .get_account(holder_pda(&env.reserve, &holder))
        .await
        .expect("banks");
    assert!(holder_account.is_none());
}

#[tokio::test]
async fn non_pool_signer_cannot_transfer_on_liquidation() {
    let mut env = setup().await;
    let user = Keypair::new();
    let ix = mint_ix(env.reserve, env.pool.pubkey(), user.pubkey(), 100, RAY);
    send(&mut env.banks, &env.payer, &[&env.pool], &[ix])
        .await
        .expect("mint");

    let intruder = Keypair::new();
    fund(&mut env.banks, &env.payer, &intruder.pubkey()).await;

    let seize = Instruction {
        program_id: yield_token::id(),
        accounts: yield_token::accounts::TransferOnLiquidation {
            pool: intruder.pubkey(),
            reserve: env.reserve,
            from_account: holder_pda(&env.reserve, &user.pubkey()),
            recipient: intruder.pubkey(),
            to_account: holder_pda(&env.reserve, &intruder.pubkey()),
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: yield_token::instruction::TransferOnLiquidation { amount: 40 }.data(),
    };
    let err = send(&mut env.banks, &env.payer, &[&intruder], &[seize])
        .await
        .expect_err("a non-pool signer must not seize collateral");
    assert_eq!(custom_code(err), u32::from(YieldTokenError::Unauthorized));

    let victim = read_holder(&mut env.banks, holder_pda(&env.reserve, &user.pubkey())).await;
    assert_eq!(victim.scaled_balance, 100);
}

#[tokio::test]
async fn reserve_creation_by_one_pool_does_not_block_another() {
    let mut env = setup().await;

    // The reserve address is derived from the pool as well as the mint, so
    // whoever initialized first has not claimed the mint for every pool.
    let other_pool = Keypair::new();
    let (ix, other_reserve) =
        initialize_reserve_ix(&env.payer.pubkey(), &env.mint, &other_pool.pubkey());
    assert_ne!(other_reserve, env.reserve);
    send(&mut env.banks, &env.payer, &[], &[ix])
        .await
        .expect("second reserve for the same mint");

    let reserve = read_reserve(&mut env.banks, other_reserve).await;
    assert_eq!(reserve.pool, other_pool.pubkey());
    assert_eq!(reserve.underlying_mint, env.mint);
}

#[tokio::test]
async fn unknown_instruction_is_rejected() {
    let mut env = setup().await;
    let ix = Instruction {
        program_id: yield_token::id(),
        accounts: vec![],
        data: vec![0xAB; 8],
    };
    let err = send(&mut env.banks, &env.payer, &[], &[ix])
        .await
        .expect_err("unrecognized instructions must not succeed");
    assert_eq!(
        custom_code(err),
        u32::from(YieldTokenError::UnsupportedAssetReceipt)
    );
}

#[tokio::test]
async fn self_transfer_cannot_inflate_balance() {
    let mut env = setup().await;
    let user = Keypair::new();
    fund(&mut env.banks, &env.payer, &user.pubkey()).await;

    let ix = mint_ix(env.reserve, env.pool.pubkey(), user.pubkey(), 100, RAY);
    send(&mut env.banks, &env.payer, &[&env.pool], &[ix])
        .await
        .expect("mint");

    let user_holder = holder_pda(&env.reserve, &user.pubkey());
    let before = read_holder(&mut env.banks, user_holder).await;
    assert_eq!(before.scaled_balance, 100);

    // Naming the sender as recipient resolves both holder seeds to the same
    // address, so the runtime hands the program two copies of one account.
    // Were the move allowed, the credited copy would be written back last and
    // the debit would be lost.
    let transfer = Instruction {
        program_id: yield_token::id(),
        accounts: yield_token::accounts::TransferYieldToken {
            authority: user.pubkey(),
            reserve: env.reserve,
            from_account: user_holder,
            recipient: user.pubkey(),
            to_account: user_holder,
            system_program: system_program::ID,
        }
        .to_account_metas(None),
        data: yield_token::instruction::Transfer { amount: 40 }.data(),
    };
    let err = send(&mut env.banks, &env.payer, &[&user], &[transfer])
        .await
        .expect_err("a self transfer must not settle");
    assert_eq!(
        custom_code(err),
        u32::from(YieldTokenError::SelfTransferNotAllowed)
    );

    let after = read_holder(&mut env.banks, user_holder).await;
    let reserve = read_reserve(&mut env.banks, env.reserve).await;
    assert_eq!(after.scaled_balance, 100);
    assert_eq!(reserve.total_scaled_supply, 100);
}
