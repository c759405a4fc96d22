use chrono::NaiveDate;
use thiserror::Error;

const DEFAULT_PORT: u16 = 3000;

/// 起動時設定のエラー
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("Invalid PORT: {0}")]
    InvalidPort(String),

    #[error("Invalid LEDGER_REFERENCE_DATE (expected YYYY-MM-DD): {0}")]
    InvalidReferenceDate(String),

    #[error("Invalid LEDGER_SEED_DEMO (expected true or false): {0}")]
    InvalidSeedFlag(String),
}

/// サーバー設定
///
/// 環境変数：
/// - PORT: 待ち受けポート（既定 3000）
/// - LEDGER_REFERENCE_DATE: 指定した場合は固定の基準日を使う
/// - LEDGER_SEED_DEMO: デモ用の貸出記録を読み込むか（既定 true）
///
/// 基準日を指定せずにデモを読み込む場合は、デモの基準日に固定する。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
    pub reference_date: Option<NaiveDate>,
    pub seed_demo: bool,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// 任意の参照関数から設定を読み込む
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(value) => value
                .parse::<u16>()
                .map_err(|_| ConfigError::InvalidPort(value))?,
            None => DEFAULT_PORT,
        };

        let reference_date = lookup("LEDGER_REFERENCE_DATE")
            .map(|value| {
                NaiveDate::parse_from_str(&value, "%Y-%m-%d")
                    .map_err(|_| ConfigError::InvalidReferenceDate(value))
            })
            .transpose()?;

        let seed_demo = match lookup("LEDGER_SEED_DEMO") {
            Some(value) => value
                .parse::<bool>()
                .map_err(|_| ConfigError::InvalidSeedFlag(value))?,
            None => true,
        };

        Ok(Self {
            port,
            reference_date,
            seed_demo,
        })
    }

    /// 固定する基準日（`None` ならシステム時計を使う）
    pub fn fixed_reference_date(&self, demo_reference_date: NaiveDate) -> Option<NaiveDate> {
        match self.reference_date {
            Some(date) => Some(date),
            None if self.seed_demo => Some(demo_reference_date),
            None => None,
        }
    }

    pub fn listen_addr(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}
