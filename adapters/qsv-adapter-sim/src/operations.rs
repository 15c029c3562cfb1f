//! Translation of host operation names into gate matrices.
//!
//! Every supported name maps to exactly one library matrix. Nothing is
//! approximated by a decomposition.

use qsv_gates::{self as gates, GateMatrix, MAX_GATE_QUBITS};
use qsv_hal::{HalError, HalResult, Operation};

/// Operation names the simulator accepts.
pub const SUPPORTED_OPERATIONS: &[&str] = &[
    "Identity",
    "PauliX",
    "PauliY",
    "PauliZ",
    "Hadamard",
    "S",
    "T",
    "SX",
    "CNOT",
    "CZ",
    "SWAP",
    "RX",
    "RY",
    "RZ",
    "PhaseShift",
    "CRX",
    "CRY",
    "CRZ",
    "CRot",
    "Rot",
    "MultiRZ",
    "IsingXX",
    "IsingYY",
    "IsingZZ",
    "Toffoli",
];

fn expect_wires(op: &Operation, wires: usize) -> HalResult<()> {
    if op.wires.len() != wires {
        return Err(HalError::InvalidWires(format!(
            "{} acts on {} wires, got {}",
            op.name,
            wires,
            op.wires.len()
        )));
    }
    Ok(())
}

fn expect_params(op: &Operation, params: usize) -> HalResult<()> {
    if op.params.len() != params {
        return Err(HalError::InvalidParameters(format!(
            "{} takes {} parameters, got {}",
            op.name,
            params,
            op.params.len()
        )));
    }
    Ok(())
}

fn arity(op: &Operation, wires: usize, params: usize) -> HalResult<()> {
    expect_wires(op, wires)?;
    expect_params(op, params)
}

/// Matrix for `op`, with its wires in the order the matrix expects.
pub fn operation_matrix(op: &Operation) -> HalResult<GateMatrix> {
    let p = &op.params;
    let matrix = match op.name.as_str() {
        "Identity" => {
            arity(op, 1, 0)?;
            gates::i()
        }
        "PauliX" => {
            arity(op, 1, 0)?;
            gates::x()
        }
        "PauliY" => {
            arity(op, 1, 0)?;
            gates::y()
        }
        "PauliZ" => {
            arity(op, 1, 0)?;
            gates::z()
        }
        "Hadamard" => {
            arity(op, 1, 0)?;
            gates::h()
        }
        "S" => {
            arity(op, 1, 0)?;
            gates::s()
        }
        "T" => {
            arity(op, 1, 0)?;
            gates::t()
        }
        "SX" => {
            arity(op, 1, 0)?;
            gates::sx()
        }
        "CNOT" => {
            arity(op, 2, 0)?;
            gates::cnot()
        }
        "CZ" => {
            arity(op, 2, 0)?;
            gates::cz()
        }
        "SWAP" => {
            arity(op, 2, 0)?;
            gates::swap()
        }
        "RX" => {
            arity(op, 1, 1)?;
            gates::rx(p[0])
        }
        "RY" => {
            arity(op, 1, 1)?;
            gates::ry(p[0])
        }
        "RZ" => {
            arity(op, 1, 1)?;
            gates::rz(p[0])
        }
        "PhaseShift" => {
            arity(op, 1, 1)?;
            gates::phase(p[0])
        }
        "CRX" => {
            arity(op, 2, 1)?;
            gates::crx(p[0])
        }
        "CRY" => {
            arity(op, 2, 1)?;
            gates::cry(p[0])
        }
        "CRZ" => {
            arity(op, 2, 1)?;
            gates::crz(p[0])
        }
        "Rot" => {
            arity(op, 1, 3)?;
            gates::rot(p[0], p[1], p[2])
        }
        "CRot" => {
            arity(op, 2, 3)?;
            gates::crot(p[0], p[1], p[2])
        }
        "MultiRZ" => {
            expect_params(op, 1)?;
            let k = op.wires.len();
            if k == 0 || k > MAX_GATE_QUBITS {
                return Err(HalError::InvalidWires(format!(
                    "MultiRZ needs between 1 and {MAX_GATE_QUBITS} wires, got {k}"
                )));
            }
            gates::multi_rz(p[0], k)
        }
        "IsingXX" => {
            arity(op, 2, 1)?;
            gates::ising_xx(p[0])
        }
        "IsingYY" => {
            arity(op, 2, 1)?;
            gates::ising_yy(p[0])
        }
        "IsingZZ" => {
            arity(op, 2, 1)?;
            gates::ising_zz(p[0])
        }
        "Toffoli" => {
            arity(op, 3, 0)?;
            gates::toffoli()
        }
        other => return Err(HalError::UnsupportedOperation(other.to_string())),
    };
    Ok(matrix)
}
