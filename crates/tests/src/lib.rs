#[cfg(test)]
mod common;

#[cfg(test)]
mod auth_tests;



#[cfg(test)]
mod resource_tests;

#[cfg(test)]
mod group_tests;

#[cfg(test)]
mod error_tests;
