#[cfg(test)]
pub mod helpers {
    use cosmwasm_std::testing::{
        mock_dependencies, mock_env, mock_info, MockApi, MockQuerier, MockStorage,
        MOCK_CONTRACT_ADDR,
    };
    use cosmwasm_std::{
        coins, from_json, to_json_binary, ContractResult, Env, OwnedDeps, Response,
        SystemError, SystemResult, Timestamp, Uint128, WasmQuery,
    };
    use cw20::{BalanceResponse, Cw20QueryMsg};

    use crate::contract::{execute, instantiate, query};
    use crate::error::ContractError;
    use crate::msg::*;

    pub type MockDeps = OwnedDeps<MockStorage, MockApi, MockQuerier>;

    pub const OWNER: &str = "owner";
    pub const TREASURY: &str = "treasury";
    pub const GAME_TOKEN: &str = "game_token";
    pub const ALICE: &str = "alice";
    pub const BOB: &str = "bob";
    pub const CAROL: &str = "carol";
    pub const DENOM: &str = "uaxm";

    pub const NOW: u64 = 1_700_000_000;
    pub const PERIOD: u64 = 604_800; // 1 week
    pub const TARGET: u128 = 10_000_000;
    pub const HARD_CAP: u128 = 50_000;

    pub fn default_instantiate_msg() -> InstantiateMsg {
        InstantiateMsg {
            game_token: GAME_TOKEN.to_string(),
            treasury: TREASURY.to_string(),
            period: PERIOD,
            denom: DENOM.to_string(),
            target: Uint128::new(TARGET),
            hard_cap: Uint128::new(HARD_CAP),
            claim_ratio: 10,
        }
    }

    /// Create an env with a specific block time
    pub fn env_at_time(secs: u64) -> Env {
        let mut env = mock_env();
        env.block.time = Timestamp::from_seconds(secs);
        env
    }

    pub fn setup_contract() -> (MockDeps, Env) {
        let mut deps = mock_dependencies();
        let env = env_at_time(NOW);
        let info = mock_info(OWNER, &[]);

        instantiate(deps.as_mut(), env.clone(), info, default_instantiate_msg()).unwrap();
        set_game_balance(&mut deps, 0);

        (deps, env)
    }

    /// Instantiate, schedule the start 100s ahead and move the clock onto it.
    pub fn setup_started() -> (MockDeps, Env) {
        let (mut deps, env) = setup_contract();
        let start = env.block.time.seconds() + 100;
        schedule_start(&mut deps, &env, OWNER, start).unwrap();
        (deps, env_at_time(start))
    }

    /// Env just past the end of the sale window started by `setup_started`.
    pub fn env_after_window(started: &Env) -> Env {
        env_at_time(started.block.time.seconds() + PERIOD)
    }

    /// Serve CW20 balance queries against GAME_TOKEN with a fixed contract balance.
    pub fn set_game_balance(deps: &mut MockDeps, amount: u128) {
        deps.querier.update_wasm(move |query| match query {
            WasmQuery::Smart { contract_addr, msg } if contract_addr == GAME_TOKEN => {
                match from_json::<Cw20QueryMsg>(msg) {
                    Ok(Cw20QueryMsg::Balance { address }) if address == MOCK_CONTRACT_ADDR => {
                        SystemResult::Ok(ContractResult::Ok(
                            to_json_binary(&BalanceResponse {
                                balance: Uint128::new(amount),
                            })
                            .unwrap(),
                        ))
                    }
                    _ => SystemResult::Ok(ContractResult::Ok(
                        to_json_binary(&BalanceResponse {
                            balance: Uint128::zero(),
                        })
                        .unwrap(),
                    )),
                }
            }
            WasmQuery::Smart { contract_addr, .. } => {
                SystemResult::Err(SystemError::NoSuchContract {
                    addr: contract_addr.clone(),
                })
            }
            _ => SystemResult::Err(SystemError::Unknown {}),
        });
    }

    /// Make every CW20 query fail, as with an unreachable GAME token.
    pub fn fail_game_token(deps: &mut MockDeps) {
        deps.querier
            .update_wasm(|_| SystemResult::Err(SystemError::Unknown {}));
    }

    pub fn set_native_balance(deps: &mut MockDeps, amount: u128) {
        deps.querier
            .update_balance(MOCK_CONTRACT_ADDR, coins(amount, DENOM));
    }

    pub fn schedule_start(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        start_time: u64,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(
            deps.as_mut(),
            env.clone(),
            info,
            ExecuteMsg::ScheduleStart { start_time },
        )
    }

    pub fn invest(
        deps: &mut MockDeps,
        env: &Env,
        investor: &str,
        amount: u128,
    ) -> Result<Response, ContractError> {
        let info = mock_info(investor, &coins(amount, DENOM));
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Invest {})
    }

    pub fn allow_claim_game(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::AllowClaimGame {})
    }

    pub fn claim(deps: &mut MockDeps, env: &Env, sender: &str) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Claim {})
    }

    pub fn withdraw(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::Withdraw {})
    }

    pub fn set_period(
        deps: &mut MockDeps,
        env: &Env,
        sender: &str,
        period: u64,
    ) -> Result<Response, ContractError> {
        let info = mock_info(sender, &[]);
        execute(deps.as_mut(), env.clone(), info, ExecuteMsg::SetPeriod { period })
    }

    pub fn query_config(deps: &MockDeps, env: &Env) -> ConfigResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Config {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_status(deps: &MockDeps, env: &Env) -> StatusResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Status {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_sale(deps: &MockDeps, env: &Env) -> SaleResponse {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::Sale {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_invested(deps: &MockDeps, env: &Env, address: &str) -> Uint128 {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Invested {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json::<InvestedResponse>(&res).unwrap().amount
    }

    pub fn query_claimed(deps: &MockDeps, env: &Env, address: &str) -> ClaimedResponse {
        let res = query(
            deps.as_ref(),
            env.clone(),
            QueryMsg::Claimed {
                address: address.to_string(),
            },
        )
        .unwrap();
        from_json(&res).unwrap()
    }

    pub fn query_is_finished(deps: &MockDeps, env: &Env) -> bool {
        let res = query(deps.as_ref(), env.clone(), QueryMsg::IsFinished {}).unwrap();
        from_json(&res).unwrap()
    }

    pub fn has_attr(res: &Response, key: &str, value: &str) -> bool {
        res.attributes
            .iter()
            .any(|a| a.key == key && a.value == value)
    }
}
