// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
// http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use cqlparser::{parse, Rule};
use std::io::{self, Result, Write};

pub fn main() -> Result<()> {
    // RUST_LOG=cqlparser=trace cargo run --example cli
    env_logger::init();

    loop {
        print!("cql> ");
        let _ = io::stdout().flush();

        let stdin = io::stdin();
        let mut raw_input = String::new();
        match stdin.read_line(&mut raw_input) {
            Ok(0) => break,
            Ok(_) => {
                let input = str::trim(&raw_input);
                if input.eq_ignore_ascii_case("exit") {
                    break;
                }
                if input.is_empty() {
                    continue;
                }
                println!("{:?}", parse(input, Rule::Statement));
            }
            Err(error) => println!("error: {}", error),
        }
    }
    Ok(())
}
