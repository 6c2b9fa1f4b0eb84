use std::path::Path;
use std::str::FromStr;

pub fn path(rawpath: &str) -> Result<(), String> {
    if Path::new(rawpath).exists() {
        Ok(())
    } else {
        Err(format!("{} doesn't exist or there is no permission to read it", rawpath))
    }
}

pub fn writable(rawpath: &str) -> Result<(), String> {
    match Path::new(rawpath).parent() {
        Some(parent) if !parent.as_os_str().is_empty() && !parent.exists() => {
            Err(format!("directory {} doesn't exist, nothing can be saved there", parent.display()))
        }
        _ => Ok(()),
    }
}

pub fn numeric<T>(low: T, upper: T) -> impl Fn(&str) -> Result<(), String>
where
    T: FromStr + std::fmt::Display + std::cmp::PartialOrd + Sized,
{
    move |val: &str| match val.parse::<T>() {
        Err(_) => Err(format!("failed to parse {}", val)),
        Ok(x) if x < low || x > upper => {
            Err(format!("Value {} is expected to be inside [{}, {}] range", val, low, upper))
        }
        Ok(_) => Ok(()),
    }
}
