use serde_derive::Deserialize;
use serde_derive::Serialize;

use log::{error, warn};
use std::fs::File;
use std::io::prelude::*;

use crate::{
    exception::Exception,
    param::{LOG_CONFIG, MAX_CHAR_TO_STRING_LENGTH},
};

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_chunk_size")]
    chunk_size: usize,
    #[serde(default = "default_buffering")]
    buffering: bool,
    #[serde(default)]
    encode_non_ascii: bool,
    #[serde(default = "default_log_config")]
    log_config: String,
}

fn default_chunk_size() -> usize {
    MAX_CHAR_TO_STRING_LENGTH
}

fn default_buffering() -> bool {
    true
}

fn default_log_config() -> String {
    LOG_CONFIG.to_string()
}

impl Config {
    pub fn new() -> Self {
        Self {
            chunk_size: default_chunk_size(),
            buffering: default_buffering(),
            encode_non_ascii: false,
            log_config: default_log_config(),
        }
    }

    pub fn from_toml(filename: &str) -> Result<Self, Exception> {
        let mut file = match File::open(filename) {
            Ok(f) => f,
            Err(e) => {
                error!("无法打开配置文件{}：{}", filename, e);
                return Err(Exception::ConfigNotFound);
            }
        };
        let mut str_val = String::new();
        if let Err(e) = file.read_to_string(&mut str_val) {
            error!("读取配置文件{}出错：{}", filename, e);
            return Err(Exception::ConfigNotFound);
        }
        Ok(Self::parse(&str_val))
    }

    /// 解析失败时使用默认配置
    pub fn parse(content: &str) -> Self {
        let mut raw_config: Config = match toml::from_str(content) {
            Ok(t) => t,
            Err(e) => {
                error!("无法成功从配置文件构建配置对象，使用默认配置：{}", e);
                Config::new()
            }
        };
        if raw_config.chunk_size == 0 || raw_config.chunk_size > MAX_CHAR_TO_STRING_LENGTH {
            warn!(
                "chunk_size被设置为{}，超出了允许的范围1~{}，因此该值将被改为{}。",
                raw_config.chunk_size, MAX_CHAR_TO_STRING_LENGTH, MAX_CHAR_TO_STRING_LENGTH
            );
            raw_config.chunk_size = MAX_CHAR_TO_STRING_LENGTH;
        }
        raw_config
    }
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    pub fn chunk_size(&self) -> usize {
        self.chunk_size
    }

    pub fn buffering(&self) -> bool {
        self.buffering
    }

    pub fn encode_non_ascii(&self) -> bool {
        self.encode_non_ascii
    }

    pub fn log_config(&self) -> &str {
        &self.log_config
    }
}
