//! Demo driver: builds a vector version by version, dumping the tree and
//! reading values back through the public API only.

use pvec::{IndexError, Vector};

fn main() -> Result<(), IndexError> {
    let v0: Vector<&str> = Vector::new();

    let v1 = v0.put(0, "A")?;
    println!("{}", v1.dump());
    println!("len: {}", v1.len());

    let v2 = v1.put(1, "B")?;
    let v2 = v2.put(1, "b")?;
    println!("{}", v2.dump());
    println!("len: {}", v2.len());

    let v3 = v2.put(2, "C")?;
    let v3 = v3.put(3, "D")?;
    let v3 = v3.put(4, "E")?;
    println!("{}", v3.dump());
    println!("len: {}", v3.len());
    println!("v[4] = {:?}", v3.get(4)?);

    let v4 = v3.put(103, "X")?;
    println!("{}", v4.dump());
    println!("len: {}", v4.len());
    println!("v[4]   = {:?}", v4.get(4)?);
    println!("v[102] = {:?}", v4.get(102)?);
    println!("v[103] = {:?}", v4.get(103)?);

    let v5 = v4.push("Y")?;
    println!("len after push: {}", v5.len());
    println!("v[104] = {:?}", v5.get(104)?);

    println!("stats: {:?}", v5.stats());

    // historical versions stay readable
    println!("v1[0] = {:?}", v1.get(0)?);
    println!("v2[1] = {:?}", v2.get(1)?);

    Ok(())
}
