//! Host-boundary builtins: printing, file reading, re-reading source,
//! and wall-clock time.

use std::time::{SystemTime, UNIX_EPOCH};

use tealeaf_foundation::{Env, Error, Value};
use tealeaf_language::{pr_seq, read};

use crate::{exact, register, string};

pub(crate) fn install(env: &Env) {
    register(env, "prn", |args| {
        println!("{}", pr_seq(args, true, " "));
        Ok(Value::nil())
    });
    register(env, "println", |args| {
        println!("{}", pr_seq(args, false, " "));
        Ok(Value::nil())
    });
    register(env, "read-string", |args| {
        exact("read-string", args, 1)?;
        read(string(&args[0])?)
    });
    register(env, "slurp", |args| {
        exact("slurp", args, 1)?;
        let path = string(&args[0])?;
        std::fs::read_to_string(path)
            .map(Value::string)
            .map_err(|err| Error::io(format!("{path}: {err}")))
    });
    register(env, "time-ms", |args| {
        exact("time-ms", args, 0)?;
        let millis = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map_or(0.0, |d| {
                #[allow(clippy::cast_precision_loss)]
                let ms = d.as_millis() as f64;
                ms
            });
        Ok(Value::number(millis))
    });
}
