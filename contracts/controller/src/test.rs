mod tests {
    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::{
        ConfigResponse, ExecuteMsg, InstantiateMsg, IsMinterResponse, IsValidLabelResponse,
        NodehashResponse, OwnerResponse, QueryMsg, RegistryResponse, TokenIdResponse,
    };
    use cns::registry::ExecuteMsg as RegistryExecuteMsg;
    use cosmwasm_std::testing::{mock_dependencies, mock_env, mock_info};
    use cosmwasm_std::{coins, from_binary, to_binary, Addr, Binary, CosmosMsg, SubMsg, WasmMsg};

    #[test]
    fn proper_initialization() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();
        assert_eq!(0, res.messages.len());

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Owner {}).unwrap();
        let res: OwnerResponse = from_binary(&res).unwrap();
        assert_eq!(res.owner, Addr::unchecked("creator"));

        let res = query(deps.as_ref(), mock_env(), QueryMsg::Registry {}).unwrap();
        let res: RegistryResponse = from_binary(&res).unwrap();
        assert_eq!(res.registry_address, Addr::unchecked("registry_address"));
    }

    #[test]
    fn test_get_token_id() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let label = String::from("alice");
        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetTokenId { label }).unwrap();
        let token_id_response: TokenIdResponse = from_binary(&res).unwrap();
        assert_eq!(
            token_id_response.token_id,
            "9c0257114eb9399a2985f8e75dad7600c5d89fe3824ffa99ec1c3eb8bf3b0501"
        );
    }

    #[test]
    fn test_get_nodehash_from_name() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let name = String::from("alice.ust");
        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetNodehash { name }).unwrap();
        let nodehash_response: NodehashResponse = from_binary(&res).unwrap();
        assert_eq!(
            nodehash_response.node,
            [
                78, 137, 50, 222, 163, 237, 87, 141, 30, 30, 144, 123, 133, 152, 167, 161, 204, 44,
                197, 227, 125, 124, 105, 133, 160, 177, 82, 121, 97, 207, 166, 156
            ]
        )
    }

    #[test]
    fn test_is_valid_label() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        for (label, expected) in vec![
            ("wallet", true),
            ("abc-123", true),
            ("ab", false),      // too short
            ("-abc", false),    // leading hyphen
            ("Wallet", false),  // uppercase
            ("a.b", false),     // dots are level separators, not label chars
            ("wallet!", false), // charset
        ] {
            let res = query(
                deps.as_ref(),
                mock_env(),
                QueryMsg::IsValidLabel {
                    label: String::from(label),
                },
            )
            .unwrap();
            let res: IsValidLabelResponse = from_binary(&res).unwrap();
            assert_eq!(res.is_valid_label, expected, "label: {}", label);
        }
    }

    #[test]
    fn test_add_minter_requires_owner() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::AddMinter {
            address: String::from("minter_address"),
        };
        let info = mock_info("not_owner", &coins(0, "uusd"));
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::NotOwner {
                sender: String::from("not_owner"),
                owner: String::from("creator"),
            }
        );

        let msg = ExecuteMsg::AddMinter {
            address: String::from("minter_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::IsMinter {
                address: String::from("minter_address"),
            },
        )
        .unwrap();
        let res: IsMinterResponse = from_binary(&res).unwrap();
        assert_eq!(res.is_minter, true);
    }

    #[test]
    fn test_mint_uri_forwards_to_registry() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        // The owner needs no allow-list entry
        let msg = ExecuteMsg::MintUri {
            owner: String::from("wallet_address"),
            label: String::from("wallet"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        assert_eq!(
            res.messages,
            vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("registry_address"),
                msg: to_binary(&RegistryExecuteMsg::MintUri {
                    owner: String::from("wallet_address"),
                    label: String::from("wallet"),
                })
                .unwrap(),
                funds: vec![],
            }))]
        );
    }

    #[test]
    fn test_mint_uri_by_approved_minter() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::AddMinter {
            address: String::from("minter_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::MintUri {
            owner: String::from("wallet_address"),
            label: String::from("wallet"),
        };
        let info = mock_info("minter_address", &coins(0, "uusd"));
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();
        assert_eq!(1, res.messages.len());
    }

    #[test]
    fn test_mint_uri_unauthorized() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::MintUri {
            owner: String::from("wallet_address"),
            label: String::from("wallet"),
        };
        let info = mock_info("anyone", &coins(0, "uusd"));
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: String::from("anyone"),
            }
        );
    }

    #[test]
    fn test_mint_uri_invalid_label() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::MintUri {
            owner: String::from("wallet_address"),
            label: String::from("wallet.cfx"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::InvalidLabel {
                label: String::from("wallet.cfx"),
            }
        );
    }

    #[test]
    fn test_mint_sub_uri_forwards_to_registry() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let node = cns::utils::namehash("wallet.cfx");
        let msg = ExecuteMsg::MintSubUri {
            owner: String::from("wallet_address"),
            node: node.clone(),
            label: String::from("token"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        assert_eq!(
            res.messages,
            vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("registry_address"),
                msg: to_binary(&RegistryExecuteMsg::MintSubUri {
                    owner: String::from("wallet_address"),
                    node,
                    label: String::from("token"),
                })
                .unwrap(),
                funds: vec![],
            }))]
        );
    }

    #[test]
    fn test_safe_mint_uri_forwards_to_registry() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let data = Binary::from(vec![0x22]);
        let msg = ExecuteMsg::SafeMintUri {
            owner: String::from("wallet_address"),
            label: String::from("token"),
            data: data.clone(),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        assert_eq!(
            res.messages,
            vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("registry_address"),
                msg: to_binary(&RegistryExecuteMsg::SafeMintUri {
                    owner: String::from("wallet_address"),
                    label: String::from("token"),
                    data,
                })
                .unwrap(),
                funds: vec![],
            }))]
        );
    }

    #[test]
    fn test_safe_mint_sub_uri_forwards_to_registry() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let node = cns::utils::namehash("token.cfx");
        let data = Binary::from(vec![0x22]);
        let msg = ExecuteMsg::SafeMintSubUri {
            owner: String::from("wallet_address"),
            node: node.clone(),
            label: String::from("wallet"),
            data: data.clone(),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        assert_eq!(
            res.messages,
            vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("registry_address"),
                msg: to_binary(&RegistryExecuteMsg::SafeMintSubUri {
                    owner: String::from("wallet_address"),
                    node,
                    label: String::from("wallet"),
                    data,
                })
                .unwrap(),
                funds: vec![],
            }))]
        );
    }

    #[test]
    fn test_burn_sub_uri_forwards_to_registry() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let node = cns::utils::namehash("token.cfx");
        let msg = ExecuteMsg::BurnSubUri {
            node: node.clone(),
            label: String::from("wallet"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        let res = execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        assert_eq!(
            res.messages,
            vec![SubMsg::new(CosmosMsg::Wasm(WasmMsg::Execute {
                contract_addr: String::from("registry_address"),
                msg: to_binary(&RegistryExecuteMsg::BurnSubUri {
                    node,
                    label: String::from("wallet"),
                })
                .unwrap(),
                funds: vec![],
            }))]
        );
    }

    #[test]
    fn test_remove_minter() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::AddMinter {
            address: String::from("minter_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::RemoveMinter {
            address: String::from("minter_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        let res = query(
            deps.as_ref(),
            mock_env(),
            QueryMsg::IsMinter {
                address: String::from("minter_address"),
            },
        )
        .unwrap();
        let res: IsMinterResponse = from_binary(&res).unwrap();
        assert_eq!(res.is_minter, false);

        // Removed minter loses access
        let msg = ExecuteMsg::MintUri {
            owner: String::from("wallet_address"),
            label: String::from("wallet"),
        };
        let info = mock_info("minter_address", &coins(0, "uusd"));
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::Unauthorized {
                sender: String::from("minter_address"),
            }
        );
    }

    #[test]
    fn test_set_config() {
        let mut deps = mock_dependencies(&[]);
        let msg = InstantiateMsg {
            registry_address: String::from("registry_address"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        instantiate(deps.as_mut(), mock_env(), info, msg).unwrap();

        let msg = ExecuteMsg::SetConfig {
            registry_address: String::from("new_registry_address"),
            owner: String::from("new_owner"),
        };
        let info = mock_info("not_owner", &coins(0, "uusd"));
        let err = execute(deps.as_mut(), mock_env(), info, msg).unwrap_err();
        assert_eq!(
            err,
            ContractError::NotOwner {
                sender: String::from("not_owner"),
                owner: String::from("creator"),
            }
        );

        let msg = ExecuteMsg::SetConfig {
            registry_address: String::from("new_registry_address"),
            owner: String::from("new_owner"),
        };
        let info = mock_info("creator", &coins(0, "uusd"));
        execute(deps.as_mut(), mock_env(), info, msg).unwrap();

        let res = query(deps.as_ref(), mock_env(), QueryMsg::GetConfig {}).unwrap();
        let res: ConfigResponse = from_binary(&res).unwrap();
        assert_eq!(
            res,
            ConfigResponse {
                registry_address: Addr::unchecked("new_registry_address"),
                owner: Addr::unchecked("new_owner"),
            }
        );
    }
}
