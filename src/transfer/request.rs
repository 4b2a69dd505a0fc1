//! Transfer request construction and signing.

use solana_sdk::hash::Hash;
use solana_sdk::pubkey::Pubkey;
use solana_sdk::signature::{Keypair, Signature, Signer};
use solana_sdk::transaction::Transaction;
use solana_system_interface::instruction as system_instruction;

use crate::transfer::error::TransferError;

/// A single native transfer, fixed once built.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransferRequest {
    from: Pubkey,
    to: Pubkey,
    lamports: u64,
    recent_blockhash: Hash,
}

impl TransferRequest {
    pub fn new(from: Pubkey, to: Pubkey, lamports: u64, recent_blockhash: Hash) -> Self {
        Self {
            from,
            to,
            lamports,
            recent_blockhash,
        }
    }

    pub fn from(&self) -> &Pubkey {
        &self.from
    }

    pub fn to(&self) -> &Pubkey {
        &self.to
    }

    pub fn lamports(&self) -> u64 {
        self.lamports
    }

    pub fn recent_blockhash(&self) -> &Hash {
        &self.recent_blockhash
    }

    /// Sign with the sender's keypair, consuming the request.
    ///
    /// Fails if the keypair is not the sender named in the request.
    pub fn sign(self, keypair: &Keypair) -> Result<SignedTransfer, TransferError> {
        if keypair.pubkey() != self.from {
            return Err(TransferError::Signing(format!(
                "keypair {} does not own sender account {}",
                keypair.pubkey(),
                self.from
            )));
        }

        let instruction = system_instruction::transfer(&self.from, &self.to, self.lamports);
        let mut transaction = Transaction::new_with_payer(&[instruction], Some(&self.from));
        transaction
            .try_sign(&[keypair], self.recent_blockhash)
            .map_err(|e| TransferError::Signing(e.to_string()))?;

        let signature = transaction
            .signatures
            .first()
            .copied()
            .ok_or_else(|| TransferError::Signing("transaction has no signature".to_string()))?;

        Ok(SignedTransfer {
            request: self,
            transaction,
            signature,
        })
    }
}

/// A signed transfer, ready to be submitted exactly once.
#[derive(Debug)]
pub struct SignedTransfer {
    request: TransferRequest,
    transaction: Transaction,
    signature: Signature,
}

impl SignedTransfer {
    pub fn request(&self) -> &TransferRequest {
        &self.request
    }

    pub fn transaction(&self) -> &Transaction {
        &self.transaction
    }

    /// Fee payer signature; the ledger uses it as the transaction id.
    pub fn signature(&self) -> &Signature {
        &self.signature
    }
}
