use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("Unauthorized: Sender {sender} is not an approved minter.")]
    Unauthorized { sender: String },

    #[error("InvalidLabel: {label}")]
    InvalidLabel { label: String },
}
