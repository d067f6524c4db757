// courtside-core-client/courtside-utils
//
// Copyright: 2025, Courtside Contributors
// License: Mozilla Public License v2.0 (MPL v2.0)

pub trait StringExt {
    fn to_uppercase_first_letter(&self) -> String;
    fn to_title_case(&self) -> String;
}

impl<T> StringExt for T
where
    T: AsRef<str>,
{
    // Source: https://stackoverflow.com/a/38406885
    fn to_uppercase_first_letter(&self) -> String {
        let mut c = self.as_ref().chars();
        match c.next() {
            None => String::new(),
            Some(f) => f.to_uppercase().collect::<String>() + c.as_str(),
        }
    }

    fn to_title_case(&self) -> String {
        self.as_ref()
            .split(' ')
            .filter(|word| !word.is_empty())
            .map(|word| word.to_lowercase().to_uppercase_first_letter())
            .collect::<Vec<_>>()
            .join(" ")
    }
}
