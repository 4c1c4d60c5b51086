use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("Unauthorized: Sender {sender} is not the owner of node {node}.")]
    Unauthorized { sender: String, node: String },

    #[error("LengthMismatch: Got {keys} keys but {values} values.")]
    LengthMismatch { keys: usize, values: usize },
}
