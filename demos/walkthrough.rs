//! 单文件示例：注册错误类型、create / merge、JSON 投影。
//! 运行：RUST_LOG 无需设置，示例内固定为 debug 级别。

use errs::prelude::*;

// ---- 错误类型：注解即注册（Registry::discover 自动发现） ----
#[errs::error_type(init = not_found_defaults)]
struct NotFound;

fn not_found_defaults(f: &mut Fault) {
    f.set("status", 404);
}

#[errs::error_type(name = "Overflow")]
struct OverflowError;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .init();

    let factory = Factory::with_registry(Registry::discover(), Default::default());
    factory.registry().register_type(OverflowError);

    // 1) 字符串
    let plain = factory.create("disk full");
    println!("{}\n", plain.stack().unwrap_or_default());

    // 2) 属性包：message / name 被解释，其余原样复制
    let bag = factory.create(props!({ "name": "QuotaError", "used": 120, "limit": 100 }));
    println!("{}\n", bag.stack().unwrap_or_default());

    // 3) 注册类型 + 属性包（两参数形式）
    let typed = factory.create_typed("notfound", props!({ "message": "no such user", "id": 7 }));
    println!("is NotFound: {}, status: {:?}", typed.is::<NotFound>(), typed.get("status"));

    // 未注册的名字静默回退到基础错误
    let fallback = factory.create_typed("nope", props!({ "message": "still an error" }));
    println!("fallback type: {}\n", fallback.type_name());

    // 4) merge：任意输入归一为错误实例并追加属性
    let merged = factory.merge(None::<Fault>, props!({ "message": "late failure", "ns": "jobs" }));
    println!("stacktrace frames: {:?}\n", merged.stacktrace());

    // 5) JSON 投影
    println!("{}", serde_json::to_string_pretty(&typed)?);

    // Fault 实现 std::error::Error，可直接用 ? 向上传播
    let res: anyhow::Result<()> = Err(fallback.into());
    if let Err(e) = res {
        println!("propagated: {e}");
    }
    Ok(())
}
