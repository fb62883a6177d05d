use anchor_lang::prelude::*;
use anchor_lang::system_program::{transfer, Transfer};
use crate::state::{ContentPricing, FeePolicy, FeeQuote, Vault};

/// Deserialize a program-owned record, or None if the PDA was never created.
pub fn load_record<T: AccountDeserialize + Owner>(info: &AccountInfo) -> Result<Option<T>> {
    if info.owner != &T::owner() || info.data_is_empty() {
        return Ok(None);
    }
    let data = info.try_borrow_data()?;
    let record = T::try_deserialize(&mut &data[..])?;
    Ok(Some(record))
}

pub fn store_record<T: AccountSerialize>(info: &AccountInfo, record: &T) -> Result<()> {
    let mut data = info.try_borrow_mut_data()?;
    let mut writer: &mut [u8] = &mut data[..];
    record.try_serialize(&mut writer)?;
    Ok(())
}

/// Move lamports from a signing wallet into program custody
pub fn collect_into_vault<'info>(
    payer: &Signer<'info>,
    vault: &Account<'info, Vault>,
    system_program: &Program<'info, System>,
    amount: u64,
) -> Result<()> {
    Vault::ensure_payer_funds(payer.lamports(), amount)?;

    transfer(
        CpiContext::new(
            system_program.to_account_info(),
            Transfer {
                from: payer.to_account_info(),
                to: vault.to_account_info(),
            },
        ),
        amount,
    )
}

/// Pay lamports out of program custody, keeping the vault rent-exempt
pub fn disburse_from_vault<'info>(
    vault: &Account<'info, Vault>,
    recipient: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let vault_info = vault.to_account_info();
    let reserve = Rent::get()?.minimum_balance(vault_info.data_len());
    let vault_balance = Vault::debit(vault_info.lamports(), reserve, amount)?;
    let recipient_balance = Vault::credit(recipient.lamports(), amount)?;

    **vault_info.try_borrow_mut_lamports()? = vault_balance;
    **recipient.try_borrow_mut_lamports()? = recipient_balance;

    Ok(())
}

/// Collect `pricing.price` from the payer and split it to admin and owner.
/// Both recipients must match the recorded identities.
pub fn settle_payment<'info>(
    fee_policy: &FeePolicy,
    pricing: &ContentPricing,
    payer: &Signer<'info>,
    vault: &mut Account<'info, Vault>,
    admin: &AccountInfo<'info>,
    owner: &AccountInfo<'info>,
    system_program: &Program<'info, System>,
) -> Result<FeeQuote> {
    fee_policy.require_admin_recipient(admin.key)?;
    pricing.require_owner(owner.key)?;

    let quote = fee_policy.quote_fee(pricing.price);

    // Payer -> vault, then vault -> admin / owner
    collect_into_vault(payer, vault, system_program, pricing.price)?;
    disburse_from_vault(vault, admin, quote.platform_share)?;
    disburse_from_vault(vault, owner, quote.creator_share)?;
    vault.record_payment(&quote)?;

    Ok(quote)
}
