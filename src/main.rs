use clap::Parser;

use pyxpiral::{
    cli::{Cli, Command},
    handler::{handle_decode, handle_encode},
};

/// 程序的主入口点
///
/// 负责初始化日志、解析命令行参数，并根据 `--encode` 或 `--decode`
/// 将执行分派到相应的处理函数
fn main() -> anyhow::Result<()> {
    // 默认只输出警告，可通过 RUST_LOG 调整
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    match cli.into_command() {
        Command::Encode(args) => handle_encode(args),
        Command::Decode(args) => handle_decode(args).map(|_| ()),
    }
}
