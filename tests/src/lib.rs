#[cfg(test)]
mod fixtures;

mod catalog {
    mod integration;
}

mod menu {
    mod integration;
}
