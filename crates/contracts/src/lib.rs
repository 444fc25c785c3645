//! Wire contracts shared between the DocuMate front-end and its backend API.

pub mod usecases;
