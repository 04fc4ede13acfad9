use soroban_sdk::{xdr::ToXdr, Address, Bytes, BytesN, Env, Symbol, Val, Vec};

/// Derives the operation id from the call it schedules.
///
/// The id covers the target, function name, arguments and salt, each XDR
/// encoded. Predecessor and delay are not part of it, so two schedules of the
/// same call collide no matter which predecessor they name.
pub(crate) fn hash_call(
    env: &Env,
    target: &Address,
    fn_name: &Symbol,
    data: &Vec<Val>,
    salt: &BytesN<32>,
) -> BytesN<32> {
    let mut calldata = Bytes::new(env);
    calldata.append(&target.clone().to_xdr(env));
    calldata.append(&fn_name.clone().to_xdr(env));
    calldata.append(&data.clone().to_xdr(env));
    calldata.append(&salt.clone().to_xdr(env));
    env.crypto().sha256(&calldata)
}
