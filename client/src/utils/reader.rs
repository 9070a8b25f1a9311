use std::future::Future;
use solana_client::{client_error::ClientError, nonblocking::rpc_client::RpcClient};
use solana_sdk::pubkey::Pubkey;

/// Reads raw account data by address.
pub trait AccountReader {
    /// Returns the account's data, or `None` if no account exists at `address`.
    fn read_account(
        &self,
        address: &Pubkey,
    ) -> impl Future<Output = Result<Option<Vec<u8>>, ClientError>>;
}

impl AccountReader for RpcClient {
    async fn read_account(&self, address: &Pubkey) -> Result<Option<Vec<u8>>, ClientError> {
        let response = self
            .get_account_with_commitment(address, self.commitment())
            .await?;
        Ok(response.value.map(|account| account.data))
    }
}
