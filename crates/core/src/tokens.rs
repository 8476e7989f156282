//! Token directory: display names and icon locations
//!
//! Symbols are matched exactly. Several feed symbols differ only by case
//! (`bNEO`, `rSWTH`, `wstETH`), so never normalise before lookup.

use std::collections::HashMap;
use std::sync::LazyLock;

/// Default location of token icons, one `<SYMBOL>.svg` per token
pub const DEFAULT_ICON_BASE_URL: &str =
    "https://raw.githubusercontent.com/Switcheo/token-icons/main/tokens";

/// Well-known display names keyed by feed symbol
pub static TOKEN_NAMES: LazyLock<HashMap<&'static str, &'static str>> = LazyLock::new(|| {
    HashMap::from([
        ("BLUR", "Blur"),
        ("bNEO", "Bridged NEO"),
        ("BUSD", "Binance USD"),
        ("USD", "US Dollar"),
        ("ETH", "Ethereum"),
        ("GMX", "GMX"),
        ("STEVMOS", "Stride Staked EVMOS"),
        ("LUNA", "Terra Luna"),
        ("RATOM", "pStake ATOM"),
        ("STRD", "Stride"),
        ("EVMOS", "Evmos"),
        ("IBCX", "IBC Index"),
        ("IRIS", "IRISnet"),
        ("ampLUNA", "Amplified LUNA"),
        ("KUJI", "Kujira"),
        ("STOSMO", "Stride Staked OSMO"),
        ("USDC", "USD Coin"),
        ("axlUSDC", "Axelar USDC"),
        ("ATOM", "Cosmos Hub"),
        ("STATOM", "Stride Staked ATOM"),
        ("OSMO", "Osmosis"),
        ("rSWTH", "Staked SWTH"),
        ("STLUNA", "Stride Staked LUNA"),
        ("LSI", "Liquid Staking Index"),
        ("OKB", "OKB"),
        ("OKT", "OKT Chain"),
        ("SWTH", "Switcheo"),
        ("USC", "USC"),
        ("WBTC", "Wrapped Bitcoin"),
        ("wstETH", "Wrapped stETH"),
        ("YieldUSD", "Yield USD"),
        ("ZIL", "Zilliqa"),
    ])
});

/// Display name for a symbol, falling back to the symbol itself
pub fn display_name(symbol: &str) -> &str {
    TOKEN_NAMES.get(symbol).copied().unwrap_or(symbol)
}

/// Build the icon locator for a symbol
pub fn icon_url(base_url: &str, symbol: &str) -> String {
    format!("{}/{}.svg", base_url.trim_end_matches('/'), symbol)
}
