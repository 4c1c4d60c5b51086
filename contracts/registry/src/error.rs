use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, PartialEq)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("NotOwner: Sender is {sender}, but owner is {owner}.")]
    NotOwner { sender: String, owner: String },

    #[error("Unauthorized: Sender {sender} has no rights over {uri}.")]
    Unauthorized { sender: String, uri: String },

    #[error("NotFound: No live record for {uri}.")]
    NotFound { uri: String },

    #[error("AlreadyMinted: {uri} already has a live owner.")]
    AlreadyMinted { uri: String },

    #[error("ParentNotFound: No record under parent node {node}.")]
    ParentNotFound { node: String },

    #[error("ReceiverRejected: Receiver declined the mint of {token_uri}.")]
    ReceiverRejected { token_uri: String },
}
