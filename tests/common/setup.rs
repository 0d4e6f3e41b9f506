/*
MIT License

Copyright (c) 2024 Davinci

Permission is hereby granted, free of charge, to any person obtaining a copy
of this software and associated documentation files (the "Software"), to deal
in the Software without restriction, including without limitation the rights
to use, copy, modify, merge, publish, distribute, sublicense, and/or sell
copies of the Software, and to permit persons to whom the Software is
furnished to do so, subject to the following conditions:

The above copyright notice and this permission notice shall be included in all
copies or substantial portions of the Software.

THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND, EXPRESS OR
IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF MERCHANTABILITY,
FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT. IN NO EVENT SHALL THE
AUTHORS OR COPYRIGHT HOLDERS BE LIABLE FOR ANY CLAIM, DAMAGES OR OTHER
LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE, ARISING FROM,
OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE
SOFTWARE.
*/

//! # Test Environment Setup Utilities
//!
//! This module provides utilities for setting up test environments,
//! including program test creation with the vault program and the mock
//! router program registered side by side.

use crate::common::router::{mock_router_process_instruction, ROUTER_PROGRAM_ID};
use crate::common::PROGRAM_ID;
use cpi_swap_vault::process_instruction;
use solana_program_test::{processor, BanksClient, ProgramTest};
use solana_sdk::signature::Keypair;
use std::env;

/// Test environment context
///
/// Contains all the basic components needed for a test environment
pub struct TestEnvironment {
    pub banks_client: BanksClient,
    pub payer: Keypair,
    pub recent_blockhash: solana_sdk::hash::Hash,
}

/// Create a program test with the vault and the mock router registered
///
/// # Returns
/// Configured ProgramTest instance
pub fn create_program_test() -> ProgramTest {
    let mut program_test = ProgramTest::new(
        "cpi_swap_vault",
        PROGRAM_ID,
        processor!(process_instruction),
    );
    program_test.add_program(
        "mock_router",
        ROUTER_PROGRAM_ID,
        processor!(mock_router_process_instruction),
    );
    program_test
}

/// Start a basic test environment
///
/// # Returns
/// TestEnvironment with banks client, payer, and recent blockhash
pub async fn start_test_environment() -> TestEnvironment {
    // Minimize runtime log noise
    env::set_var(
        "RUST_LOG",
        "error,solana_runtime::message_processor::stable_log=error",
    );
    let _ = env_logger::try_init();

    let program_test = create_program_test();
    let (banks_client, payer, recent_blockhash) = program_test.start().await;

    TestEnvironment {
        banks_client,
        payer,
        recent_blockhash,
    }
}
