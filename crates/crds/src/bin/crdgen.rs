//! Prints the FleetOps CRD manifests as a multi-document YAML stream.

use anyhow::Result;
use kube::CustomResourceExt;

fn main() -> Result<()> {
    print!("{}", serde_yaml::to_string(&crds::Backup::crd())?);
    println!("---");
    print!("{}", serde_yaml::to_string(&crds::NodePool::crd())?);
    println!("---");
    print!("{}", serde_yaml::to_string(&crds::SecurityProfile::crd())?);

    Ok(())
}
