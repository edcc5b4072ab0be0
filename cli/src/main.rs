use natded::*;

const HELP: &str = "\
commands:
  goal <sequent>   start a new proof, e.g. `goal p , p => q |-- q`
  <rule> [n]       apply <rule> to goal n (default: 1)
  undo             undo the last step
  show             print the open goals
  rules            list the rules
  help             print this message
  quit             exit";

/// The state of an interactive session.
struct Session {
    st: Option<ProofState>,
    undo_limit: usize,
}

enum Step {
    Continue,
    Quit,
}

impl Session {
    fn new(undo_limit: usize) -> Self {
        Session {
            st: None,
            undo_limit,
        }
    }

    fn start(&mut self, src: &str) -> Result<()> {
        let g = parse_goal(src)?;
        log::info!("new goal `{}`", g);
        let mut st = ProofState::from_goal(g);
        st.set_undo_limit(self.undo_limit);
        self.st = Some(st);
        Ok(())
    }

    fn state_mut(&mut self) -> Result<&mut ProofState> {
        self.st
            .as_mut()
            .ok_or_else(|| Error::new("no proof in progress, use `goal <sequent>`"))
    }

    fn show(&self) {
        match &self.st {
            Some(st) => print!("{}", st),
            None => println!("no proof in progress"),
        }
    }

    /// Run one line of input.
    fn run(&mut self, line: &str) -> Result<Step> {
        let line = line.trim();
        let (cmd, rest) = match line.find(char::is_whitespace) {
            Some(i) => (&line[..i], line[i..].trim()),
            None => (line, ""),
        };
        match cmd {
            "" => {}
            "quit" | "exit" => return Ok(Step::Quit),
            "help" => println!("{}", HELP),
            "rules" => {
                for r in Rule::ALL.iter() {
                    let kind = if r.is_classical() { " (classical)" } else { "" };
                    println!("  {:<16} {}{}", r.name(), r.descr(), kind);
                }
            }
            "show" => self.show(),
            "goal" => {
                self.start(rest)?;
                self.show()
            }
            "undo" => {
                self.state_mut()?.undo()?;
                self.show()
            }
            _ => {
                let rule: Rule = cmd.parse()?;
                let i = if rest.is_empty() {
                    0
                } else {
                    match rest.parse::<usize>() {
                        Ok(n) if n >= 1 => n - 1,
                        _ => {
                            return Err(Error::new_string(format!(
                                "invalid goal number `{}`",
                                rest
                            )))
                        }
                    }
                };
                let st = self.state_mut()?;
                st.apply(i, rule)?;
                if st.is_done() {
                    log::info!("proof complete");
                }
                self.show()
            }
        }
        Ok(Step::Continue)
    }
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    log::info!("start cli");

    let mut args = pico_args::Arguments::from_env();
    if args.contains(["-h", "--help"]) {
        println!(
            "usage: natded [--goal <sequent>] [--history <file>] [--no-history] [--undo-limit <n>]"
        );
        println!("{}", HELP);
        return Ok(());
    }
    let no_history = args.contains("--no-history");
    let history: String = args
        .opt_value_from_str("--history")?
        .unwrap_or_else(|| ".natded_history".to_string());
    let goal: Option<String> = args.opt_value_from_str("--goal")?;
    let undo_limit: usize = args
        .opt_value_from_str("--undo-limit")?
        .unwrap_or(kernel::proof_state::DEFAULT_UNDO_LIMIT);

    let mut session = Session::new(undo_limit);
    if let Some(g) = goal {
        session.start(&g)?;
        session.show();
    }

    let mut rl = rustyline::Editor::<()>::new();
    if !no_history && rl.load_history(&history).is_err() {
        log::info!("No previous history.");
    }

    loop {
        let readline = rl.readline("> ");
        match readline {
            Ok(line) => {
                rl.add_history_entry(line.as_str());

                log::debug!("run line {:?}", &line);
                match session.run(&line) {
                    Ok(Step::Continue) => {}
                    Ok(Step::Quit) => break,
                    Err(e) => {
                        log::error!("err: {}", e);
                        println!("error: {}", e);
                    }
                }
            }
            Err(rustyline::error::ReadlineError::Interrupted) => {
                println!("CTRL-C");
                break;
            }
            Err(rustyline::error::ReadlineError::Eof) => {
                println!("CTRL-D");
                break;
            }
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }
    if !no_history {
        rl.save_history(&history)?;
    }

    Ok(())
}
