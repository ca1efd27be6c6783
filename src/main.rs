use std::io::{self, Write};

use log::error;
use paging_sim::{
    meta_commands::{parse_meta_command, MetaCommand, HELP},
    render,
    repl::{parse_addresses, REPL},
    DefaultPager,
};

fn execute(command: MetaCommand, pager: &mut DefaultPager) {
    match command {
        MetaCommand::Exit => {}
        MetaCommand::Help => println!("{}", HELP),
        MetaCommand::Reset => {
            pager.reset();
            println!("{}", render::counters(&pager.snapshot()));
        }
        MetaCommand::Policy(None) => println!("Policy: {}", pager.policy()),
        MetaCommand::Policy(Some(policy)) => {
            pager.set_policy(policy);
            println!("Policy: {}", pager.policy());
        }
        MetaCommand::Trace(trace) => match pager.run(&trace) {
            Ok(accesses) => {
                for access in &accesses {
                    println!("{}", render::access(access));
                }
                println!("{}", render::counters(&pager.snapshot()));
            }
            Err(err) => println!("{}", err),
        },
        MetaCommand::Table => print!("{}", render::page_table(&pager.snapshot())),
        MetaCommand::Memory => print!("{}", render::frames(&pager.snapshot())),
        MetaCommand::Disk => print!("{}", render::backing_store(&pager.snapshot())),
        MetaCommand::Queue => println!("{}", render::load_queue(&pager.snapshot())),
        MetaCommand::History => println!("{}", render::history(&pager.snapshot())),
        MetaCommand::Stats => println!("{}", render::counters(&pager.snapshot())),
    }
}

fn access_all(input: &str, pager: &mut DefaultPager) {
    let addresses = match parse_addresses(input) {
        Ok(addresses) => addresses,
        Err(err) => {
            println!("{}", err);
            return;
        }
    };
    for address in addresses {
        match pager.access(address) {
            Ok(access) => println!("{}", render::access(&access)),
            Err(err) => println!("{}", err),
        }
    }
    println!("{}", render::counters(&pager.snapshot()));
}

fn main() {
    env_logger::init();

    let mut pager = DefaultPager::new();
    let repl = REPL {};
    println!("---- Page replacement simulator, .help for commands ----");

    loop {
        print!("{}> ", pager.policy());
        if let Err(err) = io::stdout().flush() {
            error!("Failed to flush stdout: {}", err);
            break;
        }
        let input = match repl.read_line() {
            Ok(Some(input)) => input,
            Ok(None) => break,
            Err(err) => {
                error!("Failed to read input: {}", err);
                break;
            }
        };
        if input.is_empty() {
            continue;
        }
        if input.starts_with('.') {
            match parse_meta_command(&input) {
                Ok(MetaCommand::Exit) => break,
                Ok(command) => execute(command, &mut pager),
                Err(err) => println!("{}", err),
            }
        } else {
            access_all(&input, &mut pager);
        }
    }
    println!("---- Simulator closed ----");
}
