use soroban_sdk::{testutils::Address as _, Address, Env};
use tideswap_factory::{TideswapFactory, TideswapFactoryClient};

pub fn setup_factory(env: &Env) -> (TideswapFactoryClient<'_>, Address) {
    let admin = Address::generate(env);
    let factory_id = env.register_contract(None, TideswapFactory);
    let client = TideswapFactoryClient::new(env, &factory_id);
    client.initialize(&admin);
    (client, admin)
}

pub fn create_token(env: &Env) -> Address {
    let admin = Address::generate(env);
    let token_id = env.register_stellar_asset_contract_v2(admin.clone());
    token_id.address()
}
