use coinboard_core::SortKey;

pub const PROMPT: &str = "> ";
pub const FAVORITES_TITLE: &str = "Favorites";
pub const LISTING_TITLE: &str = "Cryptocurrency Table";

/// Main listing columns, each sortable by its key.
pub const LISTING_COLUMNS: [(SortKey, &str); 6] = [
    (SortKey::Rank, "Rank"),
    (SortKey::Name, "Name"),
    (SortKey::Symbol, "Symbol"),
    (SortKey::PriceUsd, "Price (USD)"),
    (SortKey::MarketCapUsd, "Market Cap (USD)"),
    (SortKey::ChangePercent24Hr, "Change (24h)"),
];
pub const ACTION_HEADER: &str = "Action";

pub const HELP_TEXT: &str = "\
Commands:
  sort <column>   sort the main table; repeat to flip direction
                  columns: rank, name, symbol, price, mcap, change
  add <id>        add an asset to favorites (max 3)
  remove <id>     remove a favorite (alias: rm)
  more            show 20 more rows
  dismiss         clear the current notice
  help            show this help
  quit            exit (alias: q, exit)";
