pub(crate) const ERR_POISONED_LOCK: &str = "poisoned lock - the slot registry is in an unknown state";
